use crate::application::errors::ApplicationError;
use crate::core::ports::ShowtimeSchedule;
use crate::core::seats::SeatCounter;
use crate::core::showtime::ShowtimeId;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveSeats {
    pub showtime_id: ShowtimeId,
    pub seats: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelSeats {
    pub showtime_id: ShowtimeId,
    pub seats: u32,
}

pub struct SeatReservationHandler<TSchedule>
where
    TSchedule: ShowtimeSchedule + 'static,
{
    schedule: Arc<TSchedule>,
}

impl<TSchedule> SeatReservationHandler<TSchedule>
where
    TSchedule: ShowtimeSchedule + 'static,
{
    pub fn new(schedule: Arc<TSchedule>) -> Self {
        Self { schedule }
    }

    pub async fn reserve(&self, command: ReserveSeats) -> Result<SeatCounter, ApplicationError> {
        if command.seats == 0 {
            tracing::warn!(showtime = %command.showtime_id, "reservation of zero seats rejected");
            return Err(ApplicationError::InvalidSeatCount);
        }
        let update = self
            .schedule
            .reserve(command.showtime_id, command.seats)
            .await?;
        if !update.accepted {
            tracing::warn!(
                showtime = %command.showtime_id,
                requested = command.seats,
                available = update.seats.available(),
                "reservation rejected"
            );
            return Err(ApplicationError::InsufficientSeats {
                requested: command.seats,
                available: update.seats.available(),
            });
        }
        tracing::info!(
            showtime = %command.showtime_id,
            seats = command.seats,
            available = update.seats.available(),
            sold_out = update.seats.is_sold_out(),
            "seats reserved"
        );
        Ok(update.seats)
    }

    pub async fn cancel(&self, command: CancelSeats) -> Result<SeatCounter, ApplicationError> {
        let seats = self
            .schedule
            .cancel(command.showtime_id, command.seats)
            .await?;
        tracing::info!(
            showtime = %command.showtime_id,
            seats = command.seats,
            available = seats.available(),
            "seats released"
        );
        Ok(seats)
    }
}

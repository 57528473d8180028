// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - The binary in shell/ and the tests import modules from this crate root.

pub mod config;

pub mod core {
    pub mod account;
    pub mod decider;
    pub mod movie;
    pub mod ports;
    pub mod room;
    pub mod seats;
    pub mod showtime;
    pub mod time_of_day;
    pub mod view;
}

pub mod application {
    pub mod errors;
    pub mod sample_data;
    pub mod command_handlers {
        pub mod add_movie_handler;
        pub mod log_in_handler;
        pub mod remove_movie_handler;
        pub mod schedule_showtime_handler;
        pub mod seat_reservation_handler;
        pub mod sign_up_handler;
    }
    pub mod query_handlers {
        pub mod showtime_queries;
    }
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_client_registry;
        pub mod in_memory_movie_catalog;
        pub mod in_memory_showtime_schedule;
    }
}

// Logical screens of the desktop client and the UI resource each one loads.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    SignUp,
    ClientMovieList,
    ManagerDashboard,
    MovieDetail,
}

impl View {
    pub fn resource(&self) -> &'static str {
        match self {
            View::Login => "/views/client-login.fxml",
            View::SignUp => "/views/client-sign-up.fxml",
            View::ClientMovieList => "/views/client-movie-list.fxml",
            View::ManagerDashboard => "/views/cinema.fxml",
            View::MovieDetail => "/views/client-movie.fxml",
        }
    }
}

#[cfg(test)]
mod view_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn it_should_map_every_view_to_a_distinct_resource() {
        let views = [
            View::Login,
            View::SignUp,
            View::ClientMovieList,
            View::ManagerDashboard,
            View::MovieDetail,
        ];
        let resources: HashSet<_> = views.iter().map(View::resource).collect();
        assert_eq!(resources.len(), views.len());
    }
}

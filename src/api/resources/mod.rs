//! Team and hero resource endpoints

pub mod heroes;
pub mod pagination;
pub mod teams;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create the resource router; mounted both at the root and under `/api`
pub fn create_resources_router() -> Router<AppState> {
    Router::new()
        // Teams
        .route("/teams/", get(teams::list_teams).post(teams::create_team))
        .route("/teams/by-name/", get(teams::get_team_by_name))
        .route(
            "/teams/{id}/",
            get(teams::get_team)
                .patch(teams::update_team)
                .delete(teams::delete_team),
        )
        // Heroes
        .route("/heroes/", post(heroes::create_hero).get(heroes::list_heroes))
        .route("/heroes/by-name/", get(heroes::get_hero_by_name))
        .route("/heroes/{id}/by-team/", get(heroes::list_heroes_by_team))
        .route(
            "/heroes/{id}/",
            get(heroes::get_hero)
                .patch(heroes::update_hero)
                .delete(heroes::delete_hero),
        )
}

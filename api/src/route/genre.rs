use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::genre::{
    delete_genre, register_genre, show_genre, show_genre_list, update_genre,
};

pub fn build_genre_routers() -> Router<AppRegistry> {
    let genres_routers = Router::new()
        .route("/", get(show_genre_list).post(register_genre))
        .route(
            "/:genre_id",
            get(show_genre).put(update_genre).delete(delete_genre),
        );

    Router::new().nest("/genres", genres_routers)
}

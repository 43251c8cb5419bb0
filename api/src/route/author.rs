use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::author::{
    delete_author, register_author, show_author, show_author_list, update_author,
};

pub fn build_author_routers() -> Router<AppRegistry> {
    let authors_routers = Router::new()
        .route("/", get(show_author_list).post(register_author))
        .route(
            "/:author_id",
            get(show_author).put(update_author).delete(delete_author),
        );

    Router::new().nest("/authors", authors_routers)
}

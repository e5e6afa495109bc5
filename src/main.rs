mod app;
mod content;
mod model;
mod persisted;
mod persisted_store;
mod reading;
mod router;
mod state;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}

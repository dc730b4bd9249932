use dioxus::logger::tracing::Level;

use perch::App;

fn main() {
    dioxus::logger::init(Level::WARN).unwrap();
    dioxus::launch(App);
}

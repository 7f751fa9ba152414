use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod enrichment;
mod error;
mod format;
mod image_processing;
mod models;
mod notify;
mod pagination;
mod services;
mod session;

use components::{
    AdoptersScreen, AdoptionsScreen, CatDetailScreen, CatsScreen, HomeScreen, LoginScreen,
    NavigationBar, SterilizationsScreen,
};
use notify::ToastHost;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    env_logger::init();
    dioxus::launch(App);
}

/// Screen navigation for the app
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Home,
    Cats,
    CatDetail(i64),
    Adopters,
    Adoptions,
    Sterilizations,
}

#[component]
fn App() -> Element {
    let mut current_screen = use_signal(|| Screen::Home);

    // Restore a persisted session before the first screen renders
    use_effect(|| session::restore());

    let authenticated = session::SESSION.read().is_authenticated();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;",

            ToastHost {}

            if !authenticated {
                LoginScreen {}
            } else {
                // Main Content
                div { style: "flex: 1; overflow-y: auto;",
                    match current_screen() {
                        Screen::Home => rsx! {
                            HomeScreen { on_navigate: move |s| current_screen.set(s) }
                        },
                        Screen::Cats => rsx! {
                            CatsScreen { on_navigate: move |s| current_screen.set(s) }
                        },
                        Screen::CatDetail(id) => rsx! {
                            CatDetailScreen { cat_id: id, on_navigate: move |s| current_screen.set(s) }
                        },
                        Screen::Adopters => rsx! {
                            AdoptersScreen {}
                        },
                        Screen::Adoptions => rsx! {
                            AdoptionsScreen {}
                        },
                        Screen::Sterilizations => rsx! {
                            SterilizationsScreen {}
                        },
                    }
                }

                // Bottom Navigation Bar
                NavigationBar {
                    current_screen: current_screen(),
                    on_navigate: move |screen| current_screen.set(screen),
                }
            }
        }
    }
}

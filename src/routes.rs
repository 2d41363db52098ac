use dioxus::prelude::*;

use crate::components::layout::SiteLayout;
use crate::pages::{
    About, AiPhilosophy, Experience, FutureVision, Home, NotFound, Projects, Summary,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/experience")]
        Experience {},
        #[route("/ai-philosophy")]
        AiPhilosophy {},
        #[route("/projects")]
        Projects {},
        #[route("/future-vision")]
        FutureVision {},
        #[route("/summary")]
        Summary {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawer::NAV_ITEMS;

    #[test]
    fn test_every_link_has_a_route() {
        let routes: Vec<String> = [
            Route::Home {},
            Route::About {},
            Route::Experience {},
            Route::AiPhilosophy {},
            Route::Projects {},
            Route::FutureVision {},
            Route::Summary {},
        ]
        .iter()
        .map(|r| r.to_string())
        .collect();

        for item in NAV_ITEMS.iter().filter(|i| !i.is_action_button) {
            assert!(routes.iter().any(|r| r == item.destination), "{}", item.label);
        }
    }
}

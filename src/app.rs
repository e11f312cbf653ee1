use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::theme::ThemeTokens;
use crate::ui::layout::Layout;
use crate::ui::map::{LEAFLET_CSS, LEAFLET_JS, MapScript};
use crate::ui::motion::{MotionScript, MotionStyles};
use crate::ui::pages::{
    AboutPage, BookingPage, ContactPage, GalleryPage, HomePage, NotFoundPage, ServicesPage,
};

/// Document shell rendered on the server.
///
/// The accent colour comes from the [`ThemeTokens`] placed in context by the
/// server, falling back to the default palette.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let theme = use_context::<ThemeTokens>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="swblends">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <style>{theme.css_variables()}</style>
                <link rel="stylesheet" href=LEAFLET_CSS crossorigin=""/>
                <script src=LEAFLET_JS crossorigin=""></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
                <MotionScript/>
                <MapScript/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/swblends.css"/>
        <Link rel="icon" href="/favicon.svg"/>
        <MotionStyles/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/services") view=ServicesPage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/booking") view=BookingPage/>
                    <Route path=path!("/gallery") view=GalleryPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                </Routes>
            </Layout>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use leptos_router::location::RequestUrl;

    use super::*;
    use crate::core::menu::MenuState;
    use crate::core::motion::Transition;
    use crate::core::routes::{NAVIGATION, NOT_FOUND_SUGGESTIONS};

    const NOT_FOUND_HEADING: &str = "Page Not Found";

    fn render_at(path: &str) -> String {
        Owner::new().with(|| {
            provide_context(RequestUrl::new(path));
            view! { <App/> }.to_html()
        })
    }

    #[test]
    fn test_unknown_path_renders_not_found() {
        let html = render_at("/nonexistent-page");
        assert!(html.contains(NOT_FOUND_HEADING));
        assert!(html.contains("Back to Home"));

        let start = html
            .find("You might be looking for:")
            .expect("suggestions heading");
        let end = start + html[start..].find("</section>").expect("end of 404 section");
        let suggestions = &html[start..end];

        assert_eq!(suggestions.matches("href=\"").count(), 3);
        for path in ["/services", "/booking", "/contact"] {
            assert!(
                suggestions.contains(&format!("href=\"{path}\"")),
                "missing suggestion {path}"
            );
        }
        for suggestion in NOT_FOUND_SUGGESTIONS {
            assert!(suggestions.contains(suggestion.title));
        }
    }

    #[test]
    fn test_every_navigation_route_is_mounted() {
        for entry in NAVIGATION {
            let html = render_at(entry.path());
            assert!(!html.contains(NOT_FOUND_HEADING), "{} fell through", entry.path());
        }
        assert!(render_at("/services/extra").contains(NOT_FOUND_HEADING));
    }

    #[test]
    fn test_navigation_links_point_where_selection_leads() {
        let html = render_at("/");
        for entry in NAVIGATION {
            let path = MenuState::default().select_navigation(&entry);
            // Desktop and mobile menus
            assert!(
                html.matches(&format!("href=\"{path}\"")).count() >= 2,
                "no header link to {path}"
            );
        }
    }

    #[test]
    fn test_gallery_route_renders_filter_bar() {
        let html = render_at("/gallery");
        assert!(html.contains("role=\"tablist\""));
        assert!(html.contains("Haircut Styles"));
    }

    #[test]
    fn test_page_wrapper_comes_to_rest_untransformed() {
        // The page wrapper holds the gallery lightbox; a lingering transform
        // would make it the containing block of the fixed overlay
        let html = render_at("/gallery");
        let style = Transition::PAGE_ENTER.style();
        assert!(style.contains("--motion-to-transform:none;"));
        assert!(html.contains(&style));
    }
}

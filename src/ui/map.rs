//! Leaflet map of the shop locations.
//!
//! The server renders a placeholder carrying its [`MapConfig`] as JSON in
//! `data-map`; [`MapScript`] turns every such placeholder into a live map
//! once Leaflet (loaded from the CDN in the shell) is available.

use leptos::prelude::*;

use crate::core::locations::{Location, MAP_ATTRIBUTION, MapConfig};

pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

#[component]
pub fn LocationsMap(
    /// Show only this location, zoomed in
    #[prop(optional)]
    focus: Option<Location>,
    #[prop(default = "h-64")] class: &'static str,
) -> impl IntoView {
    let config = focus.map(MapConfig::focused).unwrap_or_default();
    let locations = focus.map_or_else(|| Location::ALL.to_vec(), |location| vec![location]);
    let fallback = fallback_html(&locations);

    match config.to_json() {
        Ok(json) => view! {
            <div class=format!("relative w-full rounded-lg overflow-hidden bg-base-300 {class}")>
                // Leaflet owns this element's children
                <div
                    class="absolute inset-0 z-0"
                    data-map=json
                    role="region"
                    aria-label="Map of our locations"
                ></div>
                <noscript inner_html=fallback></noscript>
            </div>
        }
        .into_any(),
        Err(err) => {
            leptos::logging::error!("map config serialization failed: {err}");
            view! { <div class=format!("w-full rounded-lg bg-base-300 {class}") inner_html=fallback></div> }
                .into_any()
        }
    }
}

/// Address list shown instead of the map when scripting is unavailable
fn fallback_html(locations: &[Location]) -> String {
    let items: String = locations
        .iter()
        .map(|l| format!("<li><strong>{}</strong>: {}</li>", l.name(), l.address()))
        .collect();
    format!(
        "<ul class=\"relative p-4 space-y-2 text-sm\">{items}<li class=\"text-xs opacity-70\">{MAP_ATTRIBUTION}</li></ul>"
    )
}

/// Initializes every `[data-map]` placeholder as it enters the document and
/// tears its map down when client-side navigation removes it
#[component]
pub fn MapScript() -> impl IntoView {
    view! { <script>{MAP_SCRIPT}</script> }
}

const MAP_SCRIPT: &str = r#"
(function() {
    function popup(marker) {
        const root = document.createElement('div');
        const name = document.createElement('strong');
        name.textContent = marker.name;
        const street = document.createElement('p');
        street.textContent = marker.street;
        const link = document.createElement('a');
        link.href = marker.booking_url;
        link.target = '_blank';
        link.rel = 'noopener noreferrer';
        link.textContent = marker.booking_label;
        root.append(name, street, link);
        return root;
    }

    function initMap(el) {
        if (el.leafletMap || !window.L) return;
        const cfg = JSON.parse(el.dataset.map);
        const map = L.map(el, { scrollWheelZoom: false })
            .setView([cfg.center.lat, cfg.center.lng], cfg.zoom);
        L.tileLayer(cfg.tile_url, { attribution: cfg.attribution }).addTo(map);
        cfg.markers.forEach(m => {
            L.marker([m.position.lat, m.position.lng]).addTo(map).bindPopup(popup(m));
        });
        el.leafletMap = map;
    }

    function destroyMap(el) {
        if (!el.leafletMap) return;
        el.leafletMap.remove();
        delete el.leafletMap;
    }

    function each(root, fn) {
        if (root.matches && root.matches('[data-map]')) fn(root);
        if (root.querySelectorAll) root.querySelectorAll('[data-map]').forEach(fn);
    }

    function init() {
        each(document, initMap);
        new MutationObserver(mutations => {
            mutations.forEach(m => {
                m.removedNodes.forEach(node => {
                    if (!node.isConnected) each(node, destroyMap);
                });
                m.addedNodes.forEach(node => each(node, initMap));
            });
        }).observe(document.body, { childList: true, subtree: true });
    }

    if (document.readyState === 'complete') {
        init();
    } else {
        window.addEventListener('load', init);
    }
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_lists_addresses_and_attribution() {
        let html = fallback_html(&Location::ALL);
        assert!(html.contains("<strong>Main Shop</strong>: 16 Laurence Street"));
        assert!(html.contains("<strong>barXbar</strong>: 11-25 Wentworth Street"));
        assert!(html.contains("openstreetmap.org/copyright"));

        let single = fallback_html(&[Location::BarXBar]);
        assert!(!single.contains("Main Shop"));
    }

    #[test]
    fn test_script_releases_removed_maps() {
        assert!(MAP_SCRIPT.contains("m.removedNodes.forEach"));
        assert!(MAP_SCRIPT.contains("el.leafletMap.remove()"));
        // Re-inserted placeholders get a fresh map
        assert!(MAP_SCRIPT.contains("delete el.leafletMap"));
    }
}

//! Rendering of [`Transition`] descriptions.
//!
//! Components attach a transition with [`Motion`]; the shared keyframes in
//! [`MotionStyles`] read the custom properties it sets and
//! [`MotionScript`] flips in-view elements to `visible`.

use leptos::prelude::*;

use crate::core::motion::Transition;

/// Wrapper animated by `transition`
#[component]
pub fn Motion(
    #[prop(default = Transition::REVEAL)] transition: Transition,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("{} {}", transition.class(), class) style=transition.style()>
            {children()}
        </div>
    }
}

/// Keyframes and trigger classes shared by every [`Motion`]
#[component]
pub fn MotionStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes motion-play {
                from {
                    opacity: var(--motion-from-opacity);
                    transform: var(--motion-from-transform);
                }
                to {
                    opacity: var(--motion-to-opacity);
                    transform: var(--motion-to-transform);
                }
            }

            .motion-mount {
                animation: motion-play var(--motion-duration) var(--motion-easing) var(--motion-delay) both;
            }

            .motion-in-view {
                opacity: var(--motion-from-opacity);
                transform: var(--motion-from-transform);
                transition:
                    opacity var(--motion-duration) var(--motion-easing) var(--motion-delay),
                    transform var(--motion-duration) var(--motion-easing) var(--motion-delay);
            }

            .motion-in-view.visible {
                opacity: var(--motion-to-opacity);
                transform: var(--motion-to-transform);
            }

            .motion-hover {
                transition: transform var(--motion-duration) var(--motion-easing);
            }

            .motion-hover:hover {
                transform: var(--motion-to-transform);
            }

            @media (prefers-reduced-motion: reduce) {
                .motion-mount, .motion-in-view, .motion-hover {
                    animation: none;
                    transition: none;
                    opacity: 1;
                    transform: none;
                }
            }
            "#
        </style>
        // Scripted browsers parse noscript content as text, so it is set as raw HTML
        <noscript inner_html="<style>.motion-in-view { opacity: 1; transform: none; }</style>"></noscript>
    }
}

/// Reveals `.motion-in-view` elements once they scroll into view, including
/// elements inserted later by client-side navigation
#[component]
pub fn MotionScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                const observer = new IntersectionObserver((entries) => {
                    entries.forEach(entry => {
                        if (entry.isIntersecting) {
                            entry.target.classList.add('visible');
                            observer.unobserve(entry.target);
                        }
                    });
                }, {
                    threshold: 0.1,
                    rootMargin: '0px 0px -50px 0px'
                });

                function observe(root) {
                    if (root.matches && root.matches('.motion-in-view')) {
                        observer.observe(root);
                    }
                    if (root.querySelectorAll) {
                        root.querySelectorAll('.motion-in-view:not(.visible)').forEach(el => observer.observe(el));
                    }
                }

                function init() {
                    observe(document);
                    new MutationObserver(mutations => {
                        mutations.forEach(m => m.addedNodes.forEach(observe));
                    }).observe(document.body, { childList: true, subtree: true });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', init);
                } else {
                    init();
                }
            })();
            "#
        </script>
    }
}

use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Palette, reset and the classes shared by every section: buttons, section
/// headings and the reveal-on-view transitions.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --ane-50: #fbf7f4;
                --ane-100: #f3e8e1;
                --ane-200: #e6cfc1;
                --ane-300: #c9a28c;
                --ane-400: #b07f69;
                --ane-500: #8c5f4c;
                --ane-900: #3b2a24;
                --ink: #2d2a28;
                --muted: #6b6460;
                --serif: "Playfair Display", Georgia, serif;
                --sans: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            }

            * {
                box-sizing: border-box;
            }

            html {
                scroll-behavior: smooth;
            }

            body {
                margin: 0;
                font-family: var(--sans);
                color: var(--ink);
                background: #ffffff;
                -webkit-font-smoothing: antialiased;
            }

            img {
                display: block;
                max-width: 100%;
            }

            a {
                color: inherit;
            }

            .container {
                width: 100%;
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 1.5rem;
            }

            .page-section {
                padding: 6rem 0;
                scroll-margin-top: 80px;
            }

            .btn {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                padding: 0.75rem 2rem;
                border-radius: 999px;
                font-family: var(--sans);
                font-size: 1rem;
                font-weight: 500;
                cursor: pointer;
                border: 1px solid transparent;
                transition: all 0.3s ease;
            }

            .btn:hover {
                transform: scale(1.05);
            }

            .btn:active {
                transform: scale(0.95);
            }

            .btn-primary {
                background: var(--ane-300);
                color: #ffffff;
                box-shadow: 0 10px 20px rgba(176, 127, 105, 0.25);
            }

            .btn-primary:hover {
                background: var(--ane-400);
            }

            .btn-outline {
                background: transparent;
                border-color: var(--ane-300);
                color: var(--ane-500);
            }

            .btn-outline:hover {
                background: var(--ane-50);
            }

            .btn-white {
                background: #ffffff;
                color: var(--ane-900);
                box-shadow: 0 6px 16px rgba(0, 0, 0, 0.12);
            }

            .icon {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                line-height: 1;
            }

            .section-heading {
                margin-bottom: 4rem;
            }

            .section-heading.centered {
                text-align: center;
            }

            .section-eyebrow {
                display: block;
                margin-bottom: 0.75rem;
                color: var(--ane-400);
                font-size: 0.85rem;
                letter-spacing: 0.2em;
                text-transform: uppercase;
            }

            .section-title {
                position: relative;
                display: inline-block;
                margin: 0;
                font-family: var(--serif);
                font-size: clamp(2.2rem, 4vw, 3rem);
                font-weight: 400;
                color: var(--ink);
            }

            .section-title::after {
                content: "";
                position: absolute;
                left: 0;
                bottom: -1rem;
                width: 100%;
                height: 4px;
                border-radius: 999px;
                background: linear-gradient(to right, var(--ane-200), transparent);
                opacity: 0.6;
            }

            .reveal {
                opacity: 0;
                transition: opacity 0.7s ease, transform 0.7s ease;
                will-change: opacity, transform;
            }

            .reveal-up {
                transform: translateY(24px);
            }

            .reveal-left {
                transform: translateX(-48px);
            }

            .reveal-right {
                transform: translateX(48px);
            }

            .reveal-scale {
                transform: scale(0.9);
            }

            .reveal.visible {
                opacity: 1;
                transform: none;
            }

            @media (prefers-reduced-motion: reduce) {
                .reveal {
                    transition: none;
                    transform: none;
                }
            }
        "#)} />
    }
}

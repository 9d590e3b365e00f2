//! CSS styles for the landing page.
//!
//! Dark theme with a gradient accent on the location name. Kept free of
//! `>`, `<` and `&` so the stylesheet is byte-identical after text escaping.
//!
//! # Customization
//!
//! ```rust
//! use page_leptos::styles::PAGE_CSS;
//!
//! let my_css = ".hero-title { font-size: 3rem; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! assert!(combined.ends_with("3rem; }"));
//! ```

/// Complete CSS for a landing page.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-page: #0a0e17;
    --bg-panel: #12161f;
    --text-main: #ffffff;
    --text-soft: #cbd5e1;
    --text-muted: #94a3b8;
    --border-subtle: rgba(255, 255, 255, 0.1);
    --accent-blue: #60a5fa;
    --accent-emerald: #34d399;
    --accent-purple: #c084fc;
    --radius: 16px;
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-main);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
}

.page-main {
    padding: 96px 0 64px;
}

.container {
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 24px;
}

.hero {
    display: flex;
    flex-direction: column;
    gap: 32px;
}

.hero-media {
    position: relative;
    width: 100%;
    height: 300px;
    border-radius: var(--radius);
    overflow: hidden;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid var(--border-subtle);
}

.hero-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.hero-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, rgba(10, 14, 23, 0.8), transparent);
}

.hero-title {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0;
}

.headline-accent {
    background: linear-gradient(to right, var(--accent-blue), var(--accent-emerald), var(--accent-purple));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    align-self: flex-start;
    padding: 12px 24px;
    border-radius: 999px;
    border: none;
    font-weight: 600;
    cursor: pointer;
}

.btn-primary {
    background: linear-gradient(to right, #3b82f6, #10b981);
    color: var(--text-main);
}

.icon {
    display: inline-block;
    flex-shrink: 0;
}

.icon-sm {
    width: 20px;
    height: 20px;
}

.panel {
    margin-top: 64px;
    background: var(--bg-panel);
    border: 1px solid var(--border-subtle);
    border-radius: var(--radius);
    padding: 40px;
}

.panel-heading {
    display: flex;
    align-items: center;
    gap: 16px;
    margin-bottom: 32px;
}

.panel-title {
    font-size: 1.875rem;
    font-weight: 700;
    margin: 0 0 24px;
}

.panel-heading .panel-title {
    margin: 0;
}

.muted {
    color: var(--text-soft);
}

.bullet-list,
.step-list {
    padding-left: 24px;
    color: var(--text-soft);
}

.bullet-list li,
.step-list li {
    margin-bottom: 8px;
}

.faq-item {
    margin-bottom: 24px;
}

.faq-question {
    font-weight: 600;
    margin: 0 0 8px;
}

.faq-answer {
    color: var(--text-muted);
    margin: 0;
}

.lead-modal {
    position: fixed;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.6);
    z-index: 50;
}

.lead-modal[hidden] {
    display: none;
}

.lead-modal-panel {
    position: relative;
    width: min(560px, 92vw);
    background: var(--bg-panel);
    border: 1px solid var(--border-subtle);
    border-radius: var(--radius);
    padding: 32px;
}

.lead-modal-close {
    position: absolute;
    top: 12px;
    right: 16px;
    background: none;
    border: none;
    color: var(--text-muted);
    font-size: 1.5rem;
    cursor: pointer;
}

@media (max-width: 640px) {
    .panel {
        padding: 24px;
    }

    .hero-title {
        font-size: 1.75rem;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::PAGE_CSS;

    #[test]
    fn stylesheet_has_no_escapable_characters() {
        assert!(!PAGE_CSS.contains('<'));
        assert!(!PAGE_CSS.contains('>'));
        assert!(!PAGE_CSS.contains('&'));
    }
}

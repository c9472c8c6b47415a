#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-pearl-ui]";

/// Default CSS for the application along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --pearl-font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  --pearl-primary: #8b5cf6;
  --pearl-primary-light: #a78bfa;
  --pearl-primary-dark: #7c3aed;
  --pearl-secondary: #6366f1;
  --pearl-bg: #f9fafb;
  --pearl-surface: #ffffff;
  --pearl-border: #e5e7eb;
  --pearl-text: #111827;
  --pearl-muted: #6b7280;
  --pearl-muted-strong: #374151;
  --pearl-radius: 1rem;
  --pearl-radius-sm: 0.5rem;
  --pearl-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --pearl-shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --pearl-tone-danger: #dc2626;
  --pearl-tone-danger-bg: #fee2e2;
  --pearl-tone-warning: #d97706;
  --pearl-tone-warning-bg: #fef3c7;
  --pearl-tone-info: #2563eb;
  --pearl-tone-info-bg: #dbeafe;
  --pearl-tone-success: #059669;
  --pearl-tone-success-bg: #d1fae5;
  --pearl-tone-primary: #7c3aed;
  --pearl-tone-primary-bg: #ede9fe;
  --pearl-tone-neutral: #4b5563;
  --pearl-tone-neutral-bg: #f3f4f6;
}

.pearl-root {
  font-family: var(--pearl-font-family);
  background: var(--pearl-bg);
  color: var(--pearl-text);
  min-height: 100vh;
  line-height: 1.625;
}

.pearl-navbar {
  position: sticky;
  top: 0;
  z-index: 10;
  height: 64px;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 2rem;
  background: var(--pearl-surface);
  border-bottom: 1px solid var(--pearl-border);
}

.pearl-brand {
  display: flex;
  align-items: center;
  gap: 12px;
  font-size: 1.25rem;
  font-weight: 700;
}

.pearl-brand-mark {
  width: 32px;
  height: 32px;
  border-radius: 8px;
  background: var(--pearl-primary);
}

.pearl-nav-links {
  display: flex;
  gap: 2rem;
}

.pearl-nav-link {
  border: none;
  background: transparent;
  color: var(--pearl-muted-strong);
  font: inherit;
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  padding: 8px 16px;
}

.pearl-nav-link:hover,
.pearl-nav-link.is-active {
  color: var(--pearl-primary);
}

.pearl-page {
  max-width: 1280px;
  margin: 0 auto;
  padding: 32px 24px;
}

.pearl-hero {
  background: #f3f4f6;
  border-radius: var(--pearl-radius);
  padding: 32px;
  margin-bottom: 32px;
}

.pearl-hero h1 {
  font-size: 2.25rem;
  font-weight: 700;
  line-height: 1.25;
  margin: 0 0 12px;
}

.pearl-hero .accent {
  color: var(--pearl-primary);
}

.pearl-hero p {
  color: var(--pearl-muted);
  font-size: 1.125rem;
  margin: 0 0 16px;
  max-width: 640px;
}

.pearl-layout {
  display: flex;
  flex-wrap: wrap;
  gap: 24px;
}

.pearl-layout > .pearl-sidebar {
  flex: 1 1 300px;
  max-width: 400px;
}

.pearl-layout > .pearl-main {
  flex: 2 1 500px;
}

.pearl-card {
  background: var(--pearl-surface);
  border: 1px solid var(--pearl-border);
  border-radius: var(--pearl-radius);
  box-shadow: var(--pearl-shadow);
  padding: 24px;
  transition: box-shadow 0.2s ease-in-out;
}

.pearl-card:hover {
  box-shadow: var(--pearl-shadow-lg);
}

.pearl-card h2,
.pearl-card h3 {
  margin: 0 0 16px;
  font-weight: 600;
}

.pearl-card-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 16px;
}

.pearl-grid {
  display: grid;
  gap: 24px;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  margin-bottom: 32px;
}

.pearl-stat-value {
  font-size: 1.875rem;
  font-weight: 700;
}

.pearl-stat-label {
  color: var(--pearl-muted);
  font-size: 0.875rem;
}

.pearl-chip {
  display: inline-flex;
  align-items: center;
  gap: 4px;
  border-radius: 999px;
  padding: 2px 10px;
  font-size: 0.78rem;
  font-weight: 600;
  background: var(--pearl-tone-neutral-bg);
  color: var(--pearl-tone-neutral);
  border: 1px solid transparent;
  white-space: nowrap;
}

.pearl-chip.is-outlined {
  background: transparent;
  border-color: currentColor;
}

.pearl-chip[data-tone="danger"] { background: var(--pearl-tone-danger-bg); color: var(--pearl-tone-danger); }
.pearl-chip[data-tone="warning"] { background: var(--pearl-tone-warning-bg); color: var(--pearl-tone-warning); }
.pearl-chip[data-tone="info"] { background: var(--pearl-tone-info-bg); color: var(--pearl-tone-info); }
.pearl-chip[data-tone="success"] { background: var(--pearl-tone-success-bg); color: var(--pearl-tone-success); }
.pearl-chip[data-tone="primary"] { background: var(--pearl-tone-primary-bg); color: var(--pearl-tone-primary); }
.pearl-chip.is-outlined[data-tone] { background: transparent; }

.pearl-chip-row {
  display: flex;
  flex-wrap: wrap;
  gap: 6px;
  margin: 6px 0;
}

.pearl-list {
  list-style: none;
  margin: 0;
  padding: 0;
}

.pearl-list-item {
  padding: 16px 0;
  border-bottom: 1px solid var(--pearl-border);
}

.pearl-list-item:last-child {
  border-bottom: none;
}

.pearl-list-item.is-clickable {
  cursor: pointer;
  border-radius: var(--pearl-radius-sm);
  padding: 16px 12px;
}

.pearl-list-item.is-clickable:hover {
  background: #f9fafb;
}

.pearl-list-title {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 12px;
  font-weight: 600;
}

.pearl-muted {
  color: var(--pearl-muted);
  font-size: 0.875rem;
  margin: 4px 0;
}

.pearl-button {
  border-radius: var(--pearl-radius-sm);
  font: inherit;
  font-size: 0.875rem;
  font-weight: 500;
  padding: 0.75rem 1.5rem;
  cursor: pointer;
  transition: all 0.2s ease-in-out;
  border: 1px solid var(--pearl-primary);
  background: transparent;
  color: var(--pearl-primary);
}

.pearl-button.is-primary {
  background: var(--pearl-primary);
  color: #ffffff;
}

.pearl-button:hover:not(:disabled) {
  transform: scale(1.02);
  box-shadow: var(--pearl-shadow-lg);
}

.pearl-button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.pearl-button-row {
  display: flex;
  gap: 16px;
  margin-top: 24px;
}

.pearl-button-row .pearl-button {
  flex: 1;
}

.pearl-field {
  display: flex;
  flex-direction: column;
  gap: 6px;
  margin-bottom: 16px;
}

.pearl-field label,
.pearl-field legend {
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--pearl-muted-strong);
}

.pearl-field input,
.pearl-field select {
  font: inherit;
  border: 1px solid #d1d5db;
  border-radius: var(--pearl-radius-sm);
  padding: 10px 12px;
}

.pearl-field input:focus,
.pearl-field select:focus {
  outline: 2px solid var(--pearl-primary);
  border-color: var(--pearl-primary);
}

.pearl-field-pair {
  display: flex;
  gap: 8px;
}

.pearl-field-pair input {
  flex: 1;
  min-width: 0;
}

.pearl-options {
  border: none;
  margin: 0 0 16px;
  padding: 0;
  display: flex;
  flex-wrap: wrap;
  gap: 6px 14px;
}

.pearl-options legend {
  width: 100%;
  margin-bottom: 4px;
}

.pearl-option {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  font-size: 0.875rem;
}

.pearl-details summary {
  cursor: pointer;
  font-weight: 600;
  padding: 8px 0 16px;
}

.pearl-notice {
  border-radius: var(--pearl-radius-sm);
  padding: 12px 16px;
  margin-bottom: 16px;
  background: var(--pearl-tone-info-bg);
  color: var(--pearl-tone-info);
}

.pearl-notice[data-tone="danger"] { background: var(--pearl-tone-danger-bg); color: var(--pearl-tone-danger); }
.pearl-notice[data-tone="warning"] { background: var(--pearl-tone-warning-bg); color: var(--pearl-tone-warning); }

.pearl-notice pre {
  white-space: pre-wrap;
  font-size: 0.8rem;
  margin: 8px 0 0;
}

.pearl-empty {
  text-align: center;
  padding: 32px 0;
  color: var(--pearl-muted);
}

.pearl-tabs {
  display: flex;
  border-bottom: 1px solid var(--pearl-border);
  margin-bottom: 16px;
}

.pearl-tab {
  border: none;
  background: transparent;
  font: inherit;
  font-weight: 500;
  padding: 12px 20px;
  cursor: pointer;
  color: var(--pearl-muted);
  border-bottom: 2px solid transparent;
}

.pearl-tab.is-active {
  color: var(--pearl-primary);
  border-bottom-color: var(--pearl-primary);
}

.pearl-patient-header {
  display: flex;
  gap: 24px;
  align-items: center;
  margin-bottom: 24px;
}

.pearl-avatar {
  width: 80px;
  height: 80px;
  border-radius: 50%;
  background: var(--pearl-primary);
  color: #ffffff;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.75rem;
  font-weight: 700;
  flex-shrink: 0;
}

.pearl-avatar.is-small {
  width: 40px;
  height: 40px;
  font-size: 0.9rem;
}

.pearl-progress {
  height: 6px;
  border-radius: 999px;
  background: #e5e7eb;
  overflow: hidden;
  margin-top: 12px;
}

.pearl-progress-bar {
  height: 100%;
  background: var(--pearl-primary);
  border-radius: 999px;
}

.pearl-progress.is-indeterminate .pearl-progress-bar {
  width: 40%;
  animation: pearl-progress 1.2s ease-in-out infinite;
}

@keyframes pearl-progress {
  0% { transform: translateX(-100%); }
  100% { transform: translateX(250%); }
}

.pearl-progress-bar[data-tone="danger"] { background: var(--pearl-tone-danger); }
.pearl-progress-bar[data-tone="warning"] { background: var(--pearl-tone-warning); }
.pearl-progress-bar[data-tone="success"] { background: var(--pearl-tone-success); }

.pearl-toolbar {
  display: flex;
  flex-wrap: wrap;
  gap: 16px;
  align-items: flex-end;
}

.pearl-toolbar .pearl-field {
  margin-bottom: 0;
  min-width: 200px;
}

.pearl-chart {
  width: 100%;
  height: auto;
}

.pearl-chart .axis {
  stroke: #d1d5db;
  stroke-width: 1;
}

.pearl-chart .bar {
  fill: var(--pearl-tone-info);
}

.pearl-chart .line {
  fill: none;
  stroke: var(--pearl-tone-info);
  stroke-width: 3;
}

.pearl-chart .line.is-secondary {
  stroke: var(--pearl-tone-success);
  stroke-width: 2;
}

.pearl-chart .dot {
  fill: var(--pearl-tone-success);
}

.pearl-chart text {
  font-size: 11px;
  fill: var(--pearl-muted);
}

.pearl-legend {
  display: flex;
  flex-wrap: wrap;
  gap: 8px 16px;
  font-size: 0.8rem;
}

.pearl-legend-swatch {
  display: inline-block;
  width: 10px;
  height: 10px;
  border-radius: 2px;
  margin-right: 6px;
}

@media (max-width: 900px) {
  .pearl-navbar {
    height: auto;
    flex-direction: column;
    gap: 8px;
    padding: 12px;
  }

  .pearl-nav-links {
    flex-wrap: wrap;
    gap: 4px;
  }

  .pearl-layout > .pearl-sidebar {
    max-width: none;
  }

  .pearl-patient-header {
    flex-direction: column;
    align-items: flex-start;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document has no <head> element"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-pearl-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}

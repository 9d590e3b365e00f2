//! Lead-capture modal mount point and the button that opens it.
//!
//! The modal's form lives elsewhere. This crate emits the container with the
//! resolved service/location context and a trigger wired by [`MODAL_SCRIPT`].

use leptos::prelude::*;

use super::{Glyph, Icon};
use crate::types::LeadContext;

/// DOM id shared by the trigger and the mount point.
pub const LEAD_MODAL_ID: &str = "lead-modal";

/// Button that opens the lead-capture modal.
#[component]
pub fn OpenModalButton(label: String, icon_base: String, glyph: Glyph) -> impl IntoView {
    view! {
        <button type="button" class="btn btn-primary" data-open-modal=LEAD_MODAL_ID>
            <Icon icon_base=icon_base glyph=glyph class="icon-sm" />
            <span>{label}</span>
        </button>
    }
}

/// Hidden dialog container carrying the lead context.
#[component]
pub fn LeadModal(context: LeadContext) -> impl IntoView {
    let context_json = serde_json::to_string(&context).unwrap_or_else(|_| "{}".to_string());

    view! {
        <div
            id=LEAD_MODAL_ID
            class="lead-modal"
            role="dialog"
            aria-modal="true"
            hidden=true
            data-service-type=context.service_name
            data-service-slug=context.service_slug
            data-location=context.location_name
            data-location-slug=context.location_slug
            data-lead-context=context_json
        >
            <div class="lead-modal-panel">
                <button type="button" class="lead-modal-close" data-close-modal="true" aria-label="Close">
                    "×"
                </button>
                <div class="lead-modal-body"></div>
            </div>
        </div>
    }
}

/// Opens/closes the modal and hands the context to whoever renders the form.
///
/// Kept free of `<`, `>` and `&` so it survives text escaping unchanged.
pub const MODAL_SCRIPT: &str = r#"
(function () {
  var modal = document.getElementById('lead-modal');
  if (!modal) { return; }
  var context = {};
  try { context = JSON.parse(modal.dataset.leadContext || '{}'); } catch (e) { context = {}; }
  document.querySelectorAll('[data-open-modal]').forEach(function (btn) {
    btn.addEventListener('click', function () {
      modal.hidden = false;
      modal.dispatchEvent(new CustomEvent('lead:open', { bubbles: true, detail: context }));
    });
  });
  modal.querySelectorAll('[data-close-modal]').forEach(function (btn) {
    btn.addEventListener('click', function () {
      modal.hidden = true;
      modal.dispatchEvent(new CustomEvent('lead:close', { bubbles: true }));
    });
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_script_has_no_escapable_characters() {
        assert!(!MODAL_SCRIPT.contains('<'));
        assert!(!MODAL_SCRIPT.contains('>'));
        assert!(!MODAL_SCRIPT.contains('&'));
    }
}

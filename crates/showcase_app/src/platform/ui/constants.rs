pub const CONFIG_SCRIPT_ID: &str = "showcase-config";

pub const SLOT_SELECTOR: &str = ".image-placeholder";
pub const FILE_INPUT_SELECTOR: &str = ".file-input";
pub const UPLOAD_AREA_SELECTOR: &str = ".upload-area";
pub const REMOVE_BUTTON_CLASS: &str = "remove-image-btn";
pub const REMOVE_BUTTON_SELECTOR: &str = ".remove-image-btn";
pub const REMOVE_BUTTON_LABEL: &str = "\u{00d7}";
pub const REMOVE_BUTTON_TITLE: &str = "Remove image";

pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const HEADER_SELECTOR: &str = ".header";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href*=\"#\"]";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const REVEAL_SELECTOR: &str = ".project-card, .about-content";
pub const ENTRANCE_SELECTOR: &str = ".timeline-item, .story-cta";
pub const TIMELINE_SELECTOR: &str = ".timeline-item";
pub const CONTACT_FORM_ID: &str = "contact-form";

pub const ACTIVE_CLASS: &str = "active";
pub const REVEALED_CLASS: &str = "fade-in-up";
pub const LOADED_CLASS: &str = "loaded";
pub const TIMELINE_ANIMATED_CLASS: &str = "animate-in";

pub const ENTRANCE_HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const ENTRANCE_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const ENTRANCE_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Injected once at startup; styles the timeline animation and the removal control.
pub const STORY_STYLES: &str = "
.timeline-item { opacity: 0; transform: translateX(-30px); transition: all 0.6s ease; }
.timeline-item.animate-in { opacity: 1; transform: translateX(0); }
.remove-image-btn { position: absolute; top: 10px; right: 10px; width: 30px; height: 30px;
    border-radius: 50%; background: rgba(239, 68, 68, 0.9); color: white; border: none;
    font-size: 18px; font-weight: bold; cursor: pointer; display: flex; align-items: center;
    justify-content: center; transition: all 0.3s ease; z-index: 10; }
.remove-image-btn:hover { background: #ef4444; transform: scale(1.1); }
";

pub const CONTACT_SENT_TEXT: &str = "Nachricht erfolgreich gesendet!";

pub const TOAST_HIDDEN_TRANSFORM: &str = "translateX(100%)";
pub const TOAST_SHOWN_TRANSFORM: &str = "translateX(0)";
pub const TOAST_BASE_STYLE: &str = "position: fixed; top: 100px; right: 20px; \
    padding: 1rem 2rem; color: white; border-radius: 0.5rem; \
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); z-index: 10000; \
    transform: translateX(100%); transition: transform 0.3s ease; \
    font-weight: 500; max-width: 300px;";

use percent_encoding::percent_decode_str;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMsg {
    TogglePressed,
    LinkClicked,
    EscapePressed,
}

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Applies `msg`; returns whether the menu changed.
    pub fn update(&mut self, msg: NavMsg) -> bool {
        let next = match msg {
            NavMsg::TogglePressed => !self.open,
            NavMsg::LinkClicked | NavMsg::EscapePressed => false,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }
}

/// Fragment id targeted by `href` when it points into the current document.
///
/// Bare `#id` links and absolute or relative URLs that resolve to the same
/// document both count. Links to other documents, and empty fragments, do not.
/// The returned id is percent-decoded, ready for `getElementById`.
pub fn anchor_fragment(page_url: &Url, href: &str) -> Option<String> {
    let target = page_url.join(href.trim()).ok()?;
    let encoded = target.fragment().filter(|f| !f.is_empty())?;
    let fragment = percent_decode_str(encoded).decode_utf8_lossy().into_owned();

    let mut target_doc = target;
    target_doc.set_fragment(None);
    let mut page_doc = page_url.clone();
    page_doc.set_fragment(None);

    (target_doc == page_doc).then_some(fragment)
}

#[cfg(test)]
mod tests {
    use super::{anchor_fragment, NavMenu, NavMsg};
    use url::Url;

    fn page() -> Url {
        Url::parse("https://portfolio.example/index.html#top").unwrap()
    }

    #[test]
    fn toggle_flips_and_link_closes() {
        let mut menu = NavMenu::default();
        assert!(menu.update(NavMsg::TogglePressed));
        assert!(menu.is_open());
        assert!(menu.update(NavMsg::LinkClicked));
        assert!(!menu.is_open());
        assert!(!menu.update(NavMsg::LinkClicked));
    }

    #[test]
    fn escape_only_matters_when_open() {
        let mut menu = NavMenu::default();
        assert!(!menu.update(NavMsg::EscapePressed));
        menu.update(NavMsg::TogglePressed);
        assert!(menu.update(NavMsg::EscapePressed));
        assert!(!menu.is_open());
    }

    #[test]
    fn bare_and_same_document_anchors_resolve() {
        assert_eq!(anchor_fragment(&page(), "#about").as_deref(), Some("about"));
        assert_eq!(
            anchor_fragment(&page(), "index.html#projects").as_deref(),
            Some("projects")
        );
        assert_eq!(
            anchor_fragment(&page(), "https://portfolio.example/index.html#contact").as_deref(),
            Some("contact")
        );
    }

    #[test]
    fn non_ascii_and_spaced_ids_come_back_decoded() {
        let page = Url::parse("https://portfolio.example/index.html").unwrap();
        assert_eq!(anchor_fragment(&page, "#über-mich").as_deref(), Some("über-mich"));
        assert_eq!(anchor_fragment(&page, "#my section").as_deref(), Some("my section"));
        assert_eq!(
            anchor_fragment(&page, "index.html#%C3%BCber-mich").as_deref(),
            Some("über-mich")
        );
    }

    #[test]
    fn other_documents_and_empty_fragments_are_ignored() {
        assert_eq!(anchor_fragment(&page(), "full-story.html#timeline"), None);
        assert_eq!(anchor_fragment(&page(), "#"), None);
        assert_eq!(anchor_fragment(&page(), "https://elsewhere.example/#about"), None);
    }
}

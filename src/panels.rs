use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Photos,
    Flowers,
    Message,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Photos, Panel::Flowers, Panel::Message];

    pub fn index(self) -> usize {
        match self {
            Panel::Photos => 0,
            Panel::Flowers => 1,
            Panel::Message => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Photos => "Photos",
            Panel::Flowers => "Flowers",
            Panel::Message => "Message",
        }
    }

    /// Keyboard shortcut: '1', '2' and '3' select the panels in order.
    pub fn from_digit(digit: char) -> Option<Panel> {
        match digit {
            '1' => Some(Panel::Photos),
            '2' => Some(Panel::Flowers),
            '3' => Some(Panel::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    MessageContent,
}

/// What a panel selection asks the rest of the page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelShown {
    pub start_carousel: bool,
}

/// Visibility, pressed flags and headings of the three panels.
#[derive(Debug, Clone)]
pub struct PanelSwitcher {
    hidden: [bool; 3],
    pressed: [bool; 3],
    photos_heading: bool,
    message_heading: bool,
    has_message_content: bool,
    focus: Option<Focus>,
}

impl PanelSwitcher {
    /// Everything starts hidden. `has_message_content` tells whether the
    /// message panel has a region that can take focus.
    pub fn new(has_message_content: bool) -> Self {
        Self {
            hidden: [true; 3],
            pressed: [false; 3],
            photos_heading: false,
            message_heading: false,
            has_message_content,
            focus: None,
        }
    }

    fn hide_all(&mut self) {
        self.hidden = [true; 3];
        self.pressed = [false; 3];
        self.focus = None;
    }

    pub fn show(&mut self, panel: Panel) -> PanelShown {
        self.hide_all();
        self.hidden[panel.index()] = false;
        self.pressed[panel.index()] = true;

        match panel {
            Panel::Photos => self.photos_heading = true,
            Panel::Flowers => {}
            Panel::Message => {
                self.message_heading = true;
                if self.has_message_content {
                    self.focus = Some(Focus::MessageContent);
                }
            }
        }
        debug!("Showing {} panel", panel.label());

        PanelShown {
            start_carousel: panel == Panel::Photos,
        }
    }

    pub fn visible(&self) -> Option<Panel> {
        Panel::ALL.into_iter().find(|p| !self.hidden[p.index()])
    }

    #[cfg(test)]
    pub fn is_hidden(&self, panel: Panel) -> bool {
        self.hidden[panel.index()]
    }

    pub fn is_pressed(&self, panel: Panel) -> bool {
        self.pressed[panel.index()]
    }

    pub fn heading_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::Photos => self.photos_heading,
            Panel::Flowers => false,
            Panel::Message => self.message_heading,
        }
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_panel() {
        let switcher = PanelSwitcher::new(true);
        assert_eq!(switcher.visible(), None);
        assert!(Panel::ALL.iter().all(|p| switcher.is_hidden(*p) && !switcher.is_pressed(*p)));
    }

    #[test]
    fn exactly_the_requested_panel_is_visible() {
        let mut switcher = PanelSwitcher::new(true);
        let sequence = [
            Panel::Flowers,
            Panel::Photos,
            Panel::Photos,
            Panel::Message,
            Panel::Flowers,
            Panel::Message,
        ];

        for panel in sequence {
            switcher.show(panel);
            let visible: Vec<Panel> = Panel::ALL.into_iter().filter(|p| !switcher.is_hidden(*p)).collect();
            let pressed: Vec<Panel> = Panel::ALL.into_iter().filter(|p| switcher.is_pressed(*p)).collect();
            assert_eq!(visible, vec![panel]);
            assert_eq!(pressed, vec![panel]);
        }
    }

    #[test]
    fn only_photos_starts_the_carousel() {
        let mut switcher = PanelSwitcher::new(true);
        assert!(switcher.show(Panel::Photos).start_carousel);
        assert!(!switcher.show(Panel::Flowers).start_carousel);
        assert!(!switcher.show(Panel::Message).start_carousel);
    }

    #[test]
    fn message_takes_focus_when_content_exists() {
        let mut with_content = PanelSwitcher::new(true);
        with_content.show(Panel::Message);
        assert_eq!(with_content.focus(), Some(Focus::MessageContent));
        assert!(with_content.heading_visible(Panel::Message));

        with_content.show(Panel::Photos);
        assert_eq!(with_content.focus(), None);
        with_content.show(Panel::Message);
        assert_eq!(with_content.focus(), Some(Focus::MessageContent));

        let mut without = PanelSwitcher::new(false);
        without.show(Panel::Message);
        assert_eq!(without.focus(), None);
    }

    #[test]
    fn headings_stay_revealed() {
        let mut switcher = PanelSwitcher::new(true);
        switcher.show(Panel::Photos);
        switcher.show(Panel::Flowers);
        assert!(switcher.heading_visible(Panel::Photos));
        assert!(switcher.is_hidden(Panel::Photos));
    }

    #[test]
    fn digits_map_to_panels() {
        assert_eq!(Panel::from_digit('1'), Some(Panel::Photos));
        assert_eq!(Panel::from_digit('3'), Some(Panel::Message));
        assert_eq!(Panel::from_digit('4'), None);
    }
}

use crossterm::style::Color;

#[derive(Clone, Copy, PartialEq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ColorScheme {
    pub bg: Color,
    pub fg: Color,
    pub line_number_fg: Color,
    pub placeholder_fg: Color,
    pub border_fg: Color,
    pub title_bg: Color,
    pub title_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    // Row backgrounds by classification
    pub added_bg: Color,
    pub removed_bg: Color,
    pub modified_bg: Color,
    // Brighter tints for the changed spans inside modified rows
    pub span_added_bg: Color,
    pub span_removed_bg: Color,
}

impl Theme {
    pub fn colors(&self) -> ColorScheme {
        match self {
            Theme::Dark => ColorScheme {
                bg: Color::Black,
                fg: Color::White,
                line_number_fg: Color::Rgb {
                    r: 120,
                    g: 120,
                    b: 120,
                },
                placeholder_fg: Color::DarkGrey,
                border_fg: Color::Rgb {
                    r: 90,
                    g: 90,
                    b: 90,
                },
                title_bg: Color::Rgb {
                    r: 50,
                    g: 70,
                    b: 90,
                },
                title_fg: Color::White,
                status_bg: Color::DarkGrey,
                status_fg: Color::White,
                // Pale tints for whole rows
                added_bg: Color::Rgb {
                    r: 30,
                    g: 50,
                    b: 30,
                },
                removed_bg: Color::Rgb {
                    r: 50,
                    g: 30,
                    b: 30,
                },
                modified_bg: Color::Rgb {
                    r: 40,
                    g: 40,
                    b: 25,
                },
                // Brighter span tints
                span_added_bg: Color::Rgb {
                    r: 50,
                    g: 100,
                    b: 50,
                },
                span_removed_bg: Color::Rgb {
                    r: 100,
                    g: 50,
                    b: 50,
                },
            },
            Theme::Light => ColorScheme {
                bg: Color::White,
                fg: Color::Black,
                line_number_fg: Color::Rgb {
                    r: 80,
                    g: 80,
                    b: 80,
                },
                placeholder_fg: Color::Grey,
                border_fg: Color::Rgb {
                    r: 160,
                    g: 160,
                    b: 160,
                },
                title_bg: Color::Rgb {
                    r: 180,
                    g: 210,
                    b: 240,
                },
                title_fg: Color::Black,
                status_bg: Color::Rgb {
                    r: 100,
                    g: 100,
                    b: 100,
                },
                status_fg: Color::White,
                added_bg: Color::Rgb {
                    r: 220,
                    g: 255,
                    b: 220,
                },
                removed_bg: Color::Rgb {
                    r: 255,
                    g: 220,
                    b: 220,
                },
                modified_bg: Color::Rgb {
                    r: 250,
                    g: 245,
                    b: 200,
                },
                span_added_bg: Color::Rgb {
                    r: 180,
                    g: 255,
                    b: 180,
                },
                span_removed_bg: Color::Rgb {
                    r: 255,
                    g: 180,
                    b: 180,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert!(Theme::Dark.toggled() == Theme::Light);
        assert!(Theme::Dark.toggled().toggled() == Theme::Dark);
    }

    #[test]
    fn test_dark_theme_base_colors() {
        let colors = Theme::Dark.colors();
        assert_eq!(colors.bg, Color::Black);
        assert_eq!(colors.fg, Color::White);
    }

    #[test]
    fn test_light_theme_base_colors() {
        let colors = Theme::Light.colors();
        assert_eq!(colors.bg, Color::White);
        assert_eq!(colors.fg, Color::Black);
    }

    #[test]
    fn test_row_tints_differ_from_background() {
        for theme in [Theme::Dark, Theme::Light] {
            let colors = theme.colors();
            assert_ne!(colors.added_bg, colors.bg);
            assert_ne!(colors.removed_bg, colors.bg);
            assert_ne!(colors.modified_bg, colors.bg);
        }
    }

    #[test]
    fn test_span_tints_brighter_than_row_tints() {
        for theme in [Theme::Dark, Theme::Light] {
            let colors = theme.colors();
            assert_ne!(colors.span_added_bg, colors.added_bg);
            assert_ne!(colors.span_removed_bg, colors.removed_bg);
        }
    }

    #[test]
    fn test_added_and_removed_distinct() {
        for theme in [Theme::Dark, Theme::Light] {
            let colors = theme.colors();
            assert_ne!(colors.added_bg, colors.removed_bg);
            assert_ne!(colors.span_added_bg, colors.span_removed_bg);
        }
    }
}

/// Badge colour of a genre. Variants are named after the colour.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenreColor {
    Red,
    Blue,
    Indigo,
    Pink,
    Purple,
    Amber,
    Orange,
    Rose,
    Cyan,
    Green,
    Yellow,
    Teal,
    Neutral,
}

const GENRE_COLORS: &[(&str, GenreColor)] = &[
    ("רוקנ'רול", GenreColor::Red),
    ("רוק", GenreColor::Red),
    ("ג'אז", GenreColor::Blue),
    ("ג'אז מוקדם", GenreColor::Blue),
    ("בלוז", GenreColor::Indigo),
    ("בלוז מוקדם", GenreColor::Indigo),
    ("פופ", GenreColor::Pink),
    ("דיסקו", GenreColor::Purple),
    ("היפ-הופ", GenreColor::Amber),
    ("היפ-הופ מוקדם", GenreColor::Amber),
    ("סול", GenreColor::Orange),
    ("R&B", GenreColor::Rose),
    ("EDM", GenreColor::Cyan),
    ("פאנק", GenreColor::Green),
    ("רגטיים", GenreColor::Yellow),
    ("סווינג", GenreColor::Teal),
];

/// Look up the badge colour, falling back to [`GenreColor::Neutral`].
pub fn color_for(genre: &str) -> GenreColor {
    GENRE_COLORS
        .iter()
        .find(|(name, _)| *name == genre)
        .map_or(GenreColor::Neutral, |(_, color)| *color)
}

impl GenreColor {
    /// Utility classes used by the web front end.
    pub fn css_class(self) -> &'static str {
        match self {
            GenreColor::Red => "bg-red-500/20 text-red-300 border-red-500/30",
            GenreColor::Blue => "bg-blue-500/20 text-blue-300 border-blue-500/30",
            GenreColor::Indigo => "bg-indigo-500/20 text-indigo-300 border-indigo-500/30",
            GenreColor::Pink => "bg-pink-500/20 text-pink-300 border-pink-500/30",
            GenreColor::Purple => "bg-purple-500/20 text-purple-300 border-purple-500/30",
            GenreColor::Amber => "bg-amber-500/20 text-amber-300 border-amber-500/30",
            GenreColor::Orange => "bg-orange-500/20 text-orange-300 border-orange-500/30",
            GenreColor::Rose => "bg-rose-500/20 text-rose-300 border-rose-500/30",
            GenreColor::Cyan => "bg-cyan-500/20 text-cyan-300 border-cyan-500/30",
            GenreColor::Green => "bg-green-500/20 text-green-300 border-green-500/30",
            GenreColor::Yellow => "bg-yellow-500/20 text-yellow-300 border-yellow-500/30",
            GenreColor::Teal => "bg-teal-500/20 text-teal-300 border-teal-500/30",
            GenreColor::Neutral => "bg-secondary text-secondary-foreground",
        }
    }

    /// SGR escape used when the CLI prints a genre badge.
    pub fn ansi_code(self) -> &'static str {
        match self {
            GenreColor::Red | GenreColor::Rose => "\x1b[31m",
            GenreColor::Blue | GenreColor::Indigo => "\x1b[34m",
            GenreColor::Pink | GenreColor::Purple => "\x1b[35m",
            GenreColor::Amber | GenreColor::Orange | GenreColor::Yellow => "\x1b[33m",
            GenreColor::Cyan | GenreColor::Teal => "\x1b[36m",
            GenreColor::Green => "\x1b[32m",
            GenreColor::Neutral => "\x1b[37m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_genres() {
        assert_eq!(color_for("רוק"), GenreColor::Red);
        assert_eq!(color_for("ג'אז מוקדם"), GenreColor::Blue);
        assert_eq!(color_for("EDM"), GenreColor::Cyan);
    }

    #[test]
    fn test_unknown_genre_is_neutral() {
        assert_eq!(color_for("קלאסי"), GenreColor::Neutral);
        assert_eq!(color_for(""), GenreColor::Neutral);
        assert_eq!(
            color_for("edm").css_class(),
            "bg-secondary text-secondary-foreground"
        );
    }

    #[test]
    fn test_variants_share_colour() {
        assert_eq!(color_for("היפ-הופ"), color_for("היפ-הופ מוקדם"));
        assert_eq!(color_for("בלוז").css_class(), color_for("בלוז מוקדם").css_class());
    }
}

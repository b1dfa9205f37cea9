use std::fmt;

/// Typeface family backing one or more bitmap fonts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Fixed,
    Helvetica,
    Times,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [FontFamily::Fixed, FontFamily::Helvetica, FontFamily::Times];
}

/// The enumerated set of named fonts usable by `text` shapes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BitmapFont {
    Fixed8x13,
    Fixed9x15,
    Helvetica10,
    Helvetica12,
    Helvetica18,
    TimesRoman10,
    TimesRoman24,
}

impl BitmapFont {
    pub const ALL: [BitmapFont; 7] = [
        BitmapFont::Fixed8x13,
        BitmapFont::Fixed9x15,
        BitmapFont::Helvetica10,
        BitmapFont::Helvetica12,
        BitmapFont::Helvetica18,
        BitmapFont::TimesRoman10,
        BitmapFont::TimesRoman24,
    ];

    /// Exact, case-sensitive name lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            BitmapFont::Fixed8x13 => "Fixed-8x13",
            BitmapFont::Fixed9x15 => "Fixed-9x15",
            BitmapFont::Helvetica10 => "Helvetica-10",
            BitmapFont::Helvetica12 => "Helvetica-12",
            BitmapFont::Helvetica18 => "Helvetica-18",
            BitmapFont::TimesRoman10 => "Times-Roman-10",
            BitmapFont::TimesRoman24 => "Times-Roman-24",
        }
    }

    pub const fn family(self) -> FontFamily {
        match self {
            BitmapFont::Fixed8x13 | BitmapFont::Fixed9x15 => FontFamily::Fixed,
            BitmapFont::Helvetica10 | BitmapFont::Helvetica12 | BitmapFont::Helvetica18 => {
                FontFamily::Helvetica
            }
            BitmapFont::TimesRoman10 | BitmapFont::TimesRoman24 => FontFamily::Times,
        }
    }

    /// Nominal pixel height.
    pub const fn size_px(self) -> f32 {
        match self {
            BitmapFont::Fixed8x13 => 13.0,
            BitmapFont::Fixed9x15 => 15.0,
            BitmapFont::Helvetica10 => 10.0,
            BitmapFont::Helvetica12 => 12.0,
            BitmapFont::Helvetica18 => 18.0,
            BitmapFont::TimesRoman10 => 10.0,
            BitmapFont::TimesRoman24 => 24.0,
        }
    }
}

impl fmt::Display for BitmapFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

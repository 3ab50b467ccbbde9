//! Static OKLCH palette tables.
//!
//! Every palette the generator knows ships compiled in: five neutral scales
//! and seventeen chromatic scales, eleven shades each, keyed 50 through 950.
//! Values are pre-rendered `oklch(...)` strings so the composers never do
//! color math on table data. Unknown palette names are rejected by serde at
//! deserialization time; the composers always hold a valid variant.

use serde::{Deserialize, Serialize};

use super::color::FALLBACK_OKLCH;

/// Shade keys shared by every scale, light to dark.
pub const SHADE_KEYS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Shade sequence for the five light-mode chart series.
pub const LIGHT_SERIES_SHADES: [u16; 5] = [500, 600, 400, 700, 300];

/// Shade sequence for the five dark-mode chart series.
pub const DARK_SERIES_SHADES: [u16; 5] = [400, 500, 300, 600, 200];

/// One named scale of eleven OKLCH values aligned with [`SHADE_KEYS`].
#[derive(Debug)]
pub struct PaletteScale {
    name: &'static str,
    values: [&'static str; 11],
}

impl PaletteScale {
    /// Lowercase palette name as it appears in configs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up the OKLCH value for a shade key, `None` for keys outside
    /// [`SHADE_KEYS`].
    #[must_use]
    pub fn shade(&self, key: u16) -> Option<&'static str> {
        let index = SHADE_KEYS.iter().position(|&k| k == key)?;
        Some(self.values[index])
    }

    /// Iterates `(shade key, OKLCH value)` pairs, light to dark.
    pub fn entries(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        SHADE_KEYS.iter().copied().zip(self.values.iter().copied())
    }

    /// Five light-mode chart series values.
    #[must_use]
    pub fn light_series(&self) -> [&'static str; 5] {
        LIGHT_SERIES_SHADES.map(|key| self.shade(key).unwrap_or(FALLBACK_OKLCH))
    }

    /// Five dark-mode chart series values.
    #[must_use]
    pub fn dark_series(&self) -> [&'static str; 5] {
        DARK_SERIES_SHADES.map(|key| self.shade(key).unwrap_or(FALLBACK_OKLCH))
    }
}

/// Neutral scale selection. Drives the base layer of every stylesheet and
/// the defaults brand slots fall back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeutralPalette {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
}

impl NeutralPalette {
    /// All neutral palettes in display order.
    pub const ALL: [Self; 5] = [Self::Slate, Self::Gray, Self::Zinc, Self::Neutral, Self::Stone];

    /// The backing scale.
    #[must_use]
    pub const fn scale(self) -> &'static PaletteScale {
        match self {
            Self::Slate => &SLATE,
            Self::Gray => &GRAY,
            Self::Zinc => &ZINC,
            Self::Neutral => &NEUTRAL,
            Self::Stone => &STONE,
        }
    }

    /// Lowercase name as it appears in configs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.scale().name
    }
}

/// Chart palette selection: which chromatic scale feeds the five chart
/// series. Defaults to blue when the config omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPalette {
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    #[default]
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl ChartPalette {
    /// All chart palettes in spectrum order.
    pub const ALL: [Self; 17] = [
        Self::Red,
        Self::Orange,
        Self::Amber,
        Self::Yellow,
        Self::Lime,
        Self::Green,
        Self::Emerald,
        Self::Teal,
        Self::Cyan,
        Self::Sky,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::Fuchsia,
        Self::Pink,
        Self::Rose,
    ];

    /// The backing scale.
    #[must_use]
    pub const fn scale(self) -> &'static PaletteScale {
        match self {
            Self::Red => &RED,
            Self::Orange => &ORANGE,
            Self::Amber => &AMBER,
            Self::Yellow => &YELLOW,
            Self::Lime => &LIME,
            Self::Green => &GREEN,
            Self::Emerald => &EMERALD,
            Self::Teal => &TEAL,
            Self::Cyan => &CYAN,
            Self::Sky => &SKY,
            Self::Blue => &BLUE,
            Self::Indigo => &INDIGO,
            Self::Violet => &VIOLET,
            Self::Purple => &PURPLE,
            Self::Fuchsia => &FUCHSIA,
            Self::Pink => &PINK,
            Self::Rose => &ROSE,
        }
    }

    /// Lowercase name as it appears in configs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.scale().name
    }

    /// Five light-mode chart series values.
    #[must_use]
    pub fn light_series(self) -> [&'static str; 5] {
        self.scale().light_series()
    }

    /// Five dark-mode chart series values.
    #[must_use]
    pub fn dark_series(self) -> [&'static str; 5] {
        self.scale().dark_series()
    }
}

/// Destructive-action color for light mode (red 600).
#[must_use]
pub fn destructive_light() -> &'static str {
    RED.shade(600).unwrap_or(FALLBACK_OKLCH)
}

/// Destructive-action color for dark mode (red 400).
#[must_use]
pub fn destructive_dark() -> &'static str {
    RED.shade(400).unwrap_or(FALLBACK_OKLCH)
}

// Tables below are pre-converted from the Tailwind reference hex values with
// the same pipeline `hex_to_oklch` implements, so table data and runtime
// conversion can never disagree.

const SLATE: PaletteScale = PaletteScale {
    name: "slate",
    values: [
        "oklch(0.9842 0.0034 247.86)",
        "oklch(0.9683 0.0069 247.90)",
        "oklch(0.9288 0.0126 255.51)",
        "oklch(0.8690 0.0198 252.89)",
        "oklch(0.7107 0.0351 256.79)",
        "oklch(0.5544 0.0407 257.42)",
        "oklch(0.4455 0.0374 257.28)",
        "oklch(0.3717 0.0392 257.29)",
        "oklch(0.2795 0.0368 260.03)",
        "oklch(0.2077 0.0398 265.75)",
        "oklch(0.1288 0.0406 264.70)",
    ],
};

const GRAY: PaletteScale = PaletteScale {
    name: "gray",
    values: [
        "oklch(0.9846 0.0017 247.84)",
        "oklch(0.9670 0.0029 264.54)",
        "oklch(0.9276 0.0058 264.53)",
        "oklch(0.8717 0.0093 258.34)",
        "oklch(0.7137 0.0192 261.32)",
        "oklch(0.5510 0.0234 264.36)",
        "oklch(0.4461 0.0263 256.80)",
        "oklch(0.3729 0.0306 259.73)",
        "oklch(0.2781 0.0296 256.85)",
        "oklch(0.2101 0.0318 264.66)",
        "oklch(0.1296 0.0274 261.69)",
    ],
};

const ZINC: PaletteScale = PaletteScale {
    name: "zinc",
    values: [
        "oklch(0.9851 0 0)",
        "oklch(0.9674 0.0013 286.38)",
        "oklch(0.9197 0.0040 286.32)",
        "oklch(0.8711 0.0055 286.29)",
        "oklch(0.7118 0.0129 286.07)",
        "oklch(0.5517 0.0138 285.94)",
        "oklch(0.4419 0.0146 285.79)",
        "oklch(0.3703 0.0119 285.81)",
        "oklch(0.2739 0.0055 286.03)",
        "oklch(0.2103 0.0059 285.89)",
        "oklch(0.1408 0.0044 285.82)",
    ],
};

const NEUTRAL: PaletteScale = PaletteScale {
    name: "neutral",
    values: [
        "oklch(0.9851 0 0)",
        "oklch(0.9702 0 0)",
        "oklch(0.9219 0 0)",
        "oklch(0.8699 0 0)",
        "oklch(0.7155 0 0)",
        "oklch(0.5555 0 0)",
        "oklch(0.4386 0 0)",
        "oklch(0.3715 0 0)",
        "oklch(0.2686 0 0)",
        "oklch(0.2046 0 0)",
        "oklch(0.1448 0 0)",
    ],
};

const STONE: PaletteScale = PaletteScale {
    name: "stone",
    values: [
        "oklch(0.9848 0.0013 106.42)",
        "oklch(0.9699 0.0013 106.42)",
        "oklch(0.9232 0.0026 48.72)",
        "oklch(0.8687 0.0043 56.37)",
        "oklch(0.7161 0.0091 56.26)",
        "oklch(0.5534 0.0116 58.07)",
        "oklch(0.4444 0.0096 73.64)",
        "oklch(0.3741 0.0087 67.56)",
        "oklch(0.2685 0.0063 34.30)",
        "oklch(0.2161 0.0061 56.04)",
        "oklch(0.1469 0.0041 49.25)",
    ],
};

const RED: PaletteScale = PaletteScale {
    name: "red",
    values: [
        "oklch(0.9705 0.0129 17.38)",
        "oklch(0.9356 0.0309 17.72)",
        "oklch(0.8845 0.0593 18.33)",
        "oklch(0.8077 0.1035 19.57)",
        "oklch(0.7106 0.1661 22.22)",
        "oklch(0.6368 0.2078 25.33)",
        "oklch(0.5771 0.2152 27.33)",
        "oklch(0.5054 0.1905 27.52)",
        "oklch(0.4437 0.1613 26.90)",
        "oklch(0.3958 0.1331 25.72)",
        "oklch(0.2575 0.0886 26.04)",
    ],
};

const ORANGE: PaletteScale = PaletteScale {
    name: "orange",
    values: [
        "oklch(0.9796 0.0158 73.68)",
        "oklch(0.9542 0.0372 75.16)",
        "oklch(0.9015 0.0729 70.70)",
        "oklch(0.8366 0.1165 66.29)",
        "oklch(0.7576 0.1590 55.93)",
        "oklch(0.7049 0.1867 47.60)",
        "oklch(0.6461 0.1943 41.12)",
        "oklch(0.5534 0.1739 38.40)",
        "oklch(0.4698 0.1430 37.30)",
        "oklch(0.4084 0.1165 38.17)",
        "oklch(0.2659 0.0762 36.26)",
    ],
};

const AMBER: PaletteScale = PaletteScale {
    name: "amber",
    values: [
        "oklch(0.9869 0.0214 95.28)",
        "oklch(0.9619 0.0580 95.62)",
        "oklch(0.9243 0.1151 95.75)",
        "oklch(0.8790 0.1534 91.61)",
        "oklch(0.8369 0.1644 84.43)",
        "oklch(0.7686 0.1647 70.08)",
        "oklch(0.6658 0.1574 58.32)",
        "oklch(0.5553 0.1455 49.00)",
        "oklch(0.4732 0.1247 46.20)",
        "oklch(0.4137 0.1054 45.90)",
        "oklch(0.2791 0.0742 45.64)",
    ],
};

const YELLOW: PaletteScale = PaletteScale {
    name: "yellow",
    values: [
        "oklch(0.9873 0.0262 102.21)",
        "oklch(0.9729 0.0693 103.19)",
        "oklch(0.9451 0.1243 101.54)",
        "oklch(0.9052 0.1657 98.11)",
        "oklch(0.8606 0.1731 91.94)",
        "oklch(0.7952 0.1617 86.05)",
        "oklch(0.6806 0.1423 75.83)",
        "oklch(0.5538 0.1207 66.44)",
        "oklch(0.4762 0.1034 61.91)",
        "oklch(0.4210 0.0897 57.71)",
        "oklch(0.2857 0.0639 53.81)",
    ],
};

const LIME: PaletteScale = PaletteScale {
    name: "lime",
    values: [
        "oklch(0.9857 0.0310 120.76)",
        "oklch(0.9669 0.0659 122.33)",
        "oklch(0.9382 0.1217 124.32)",
        "oklch(0.8972 0.1786 126.67)",
        "oklch(0.8493 0.2073 128.85)",
        "oklch(0.7681 0.2044 130.85)",
        "oklch(0.6482 0.1754 131.68)",
        "oklch(0.5322 0.1405 131.59)",
        "oklch(0.4528 0.1129 130.93)",
        "oklch(0.4050 0.0956 131.06)",
        "oklch(0.2741 0.0688 132.11)",
    ],
};

const GREEN: PaletteScale = PaletteScale {
    name: "green",
    values: [
        "oklch(0.9819 0.0181 155.83)",
        "oklch(0.9624 0.0434 156.74)",
        "oklch(0.9250 0.0806 155.99)",
        "oklch(0.8712 0.1363 154.45)",
        "oklch(0.8003 0.1821 151.71)",
        "oklch(0.7227 0.1920 149.58)",
        "oklch(0.6271 0.1699 149.21)",
        "oklch(0.5273 0.1371 150.07)",
        "oklch(0.4479 0.1083 151.33)",
        "oklch(0.3925 0.0896 152.54)",
        "oklch(0.2664 0.0628 152.93)",
    ],
};

const EMERALD: PaletteScale = PaletteScale {
    name: "emerald",
    values: [
        "oklch(0.9793 0.0207 166.11)",
        "oklch(0.9505 0.0507 163.05)",
        "oklch(0.9049 0.0895 164.15)",
        "oklch(0.8452 0.1299 164.98)",
        "oklch(0.7729 0.1535 163.22)",
        "oklch(0.6959 0.1491 162.48)",
        "oklch(0.5960 0.1274 163.23)",
        "oklch(0.5081 0.1049 165.61)",
        "oklch(0.4318 0.0865 166.91)",
        "oklch(0.3780 0.0730 168.94)",
        "oklch(0.2621 0.0487 172.55)",
    ],
};

const TEAL: PaletteScale = PaletteScale {
    name: "teal",
    values: [
        "oklch(0.9836 0.0142 180.72)",
        "oklch(0.9527 0.0498 180.80)",
        "oklch(0.9100 0.0927 180.43)",
        "oklch(0.8549 0.1251 181.07)",
        "oklch(0.7845 0.1325 181.91)",
        "oklch(0.7038 0.1230 182.50)",
        "oklch(0.6002 0.1038 184.70)",
        "oklch(0.5109 0.0861 186.39)",
        "oklch(0.4370 0.0705 188.22)",
        "oklch(0.3861 0.0590 188.42)",
        "oklch(0.2773 0.0447 192.52)",
    ],
};

const CYAN: PaletteScale = PaletteScale {
    name: "cyan",
    values: [
        "oklch(0.9841 0.0189 200.87)",
        "oklch(0.9563 0.0443 203.39)",
        "oklch(0.9167 0.0772 205.04)",
        "oklch(0.8651 0.1153 207.08)",
        "oklch(0.7971 0.1339 211.53)",
        "oklch(0.7148 0.1257 215.22)",
        "oklch(0.6089 0.1109 221.72)",
        "oklch(0.5198 0.0936 223.13)",
        "oklch(0.4500 0.0771 224.28)",
        "oklch(0.3982 0.0664 227.39)",
        "oklch(0.3018 0.0541 229.70)",
    ],
};

const SKY: PaletteScale = PaletteScale {
    name: "sky",
    values: [
        "oklch(0.9771 0.0125 236.62)",
        "oklch(0.9514 0.0250 236.82)",
        "oklch(0.9014 0.0555 230.90)",
        "oklch(0.8276 0.1013 230.32)",
        "oklch(0.7535 0.1390 232.66)",
        "oklch(0.6847 0.1479 237.32)",
        "oklch(0.5876 0.1389 241.97)",
        "oklch(0.5000 0.1193 242.75)",
        "oklch(0.4434 0.1000 240.79)",
        "oklch(0.3912 0.0845 240.88)",
        "oklch(0.2935 0.0632 243.16)",
    ],
};

const BLUE: PaletteScale = PaletteScale {
    name: "blue",
    values: [
        "oklch(0.9705 0.0142 254.60)",
        "oklch(0.9319 0.0316 255.59)",
        "oklch(0.8823 0.0571 254.13)",
        "oklch(0.8091 0.0956 251.81)",
        "oklch(0.7137 0.1434 254.62)",
        "oklch(0.6231 0.1880 259.81)",
        "oklch(0.5461 0.2152 262.88)",
        "oklch(0.4882 0.2172 264.38)",
        "oklch(0.4244 0.1809 265.64)",
        "oklch(0.3791 0.1378 265.52)",
        "oklch(0.2823 0.0874 267.94)",
    ],
};

const INDIGO: PaletteScale = PaletteScale {
    name: "indigo",
    values: [
        "oklch(0.9619 0.0179 272.31)",
        "oklch(0.9299 0.0334 272.79)",
        "oklch(0.8699 0.0622 274.04)",
        "oklch(0.7853 0.1041 274.71)",
        "oklch(0.6801 0.1583 276.93)",
        "oklch(0.5854 0.2041 277.12)",
        "oklch(0.5106 0.2301 276.97)",
        "oklch(0.4568 0.2146 277.02)",
        "oklch(0.3984 0.1773 277.37)",
        "oklch(0.3588 0.1354 278.70)",
        "oklch(0.2573 0.0861 281.29)",
    ],
};

const VIOLET: PaletteScale = PaletteScale {
    name: "violet",
    values: [
        "oklch(0.9691 0.0161 293.76)",
        "oklch(0.9433 0.0284 294.59)",
        "oklch(0.8943 0.0549 293.28)",
        "oklch(0.8112 0.1013 293.57)",
        "oklch(0.7090 0.1592 293.54)",
        "oklch(0.6056 0.2189 292.72)",
        "oklch(0.5413 0.2466 293.01)",
        "oklch(0.4907 0.2412 292.58)",
        "oklch(0.4320 0.2106 292.76)",
        "oklch(0.3796 0.1783 293.74)",
        "oklch(0.2827 0.1351 291.09)",
    ],
};

const PURPLE: PaletteScale = PaletteScale {
    name: "purple",
    values: [
        "oklch(0.9768 0.0142 308.30)",
        "oklch(0.9464 0.0327 307.17)",
        "oklch(0.9024 0.0604 306.70)",
        "oklch(0.8268 0.1082 306.38)",
        "oklch(0.7217 0.1767 305.50)",
        "oklch(0.6268 0.2325 303.90)",
        "oklch(0.5575 0.2525 302.32)",
        "oklch(0.4955 0.2369 301.92)",
        "oklch(0.4383 0.1983 303.72)",
        "oklch(0.3807 0.1661 304.99)",
        "oklch(0.2905 0.1432 302.72)",
    ],
};

const FUCHSIA: PaletteScale = PaletteScale {
    name: "fuchsia",
    values: [
        "oklch(0.9773 0.0173 320.06)",
        "oklch(0.9520 0.0360 318.85)",
        "oklch(0.9030 0.0732 319.62)",
        "oklch(0.8330 0.1322 321.43)",
        "oklch(0.7477 0.2070 322.16)",
        "oklch(0.6668 0.2591 322.15)",
        "oklch(0.5915 0.2569 322.90)",
        "oklch(0.5180 0.2258 323.95)",
        "oklch(0.4519 0.1922 324.59)",
        "oklch(0.4007 0.1601 325.61)",
        "oklch(0.2932 0.1309 325.66)",
    ],
};

const PINK: PaletteScale = PaletteScale {
    name: "pink",
    values: [
        "oklch(0.9714 0.0141 343.20)",
        "oklch(0.9482 0.0276 342.26)",
        "oklch(0.8994 0.0589 343.23)",
        "oklch(0.8228 0.1095 346.02)",
        "oklch(0.7253 0.1752 349.76)",
        "oklch(0.6559 0.2118 354.31)",
        "oklch(0.5916 0.2180 0.58)",
        "oklch(0.5246 0.1990 3.96)",
        "oklch(0.4587 0.1697 3.82)",
        "oklch(0.4078 0.1442 2.43)",
        "oklch(0.2845 0.1048 3.91)",
    ],
};

const ROSE: PaletteScale = PaletteScale {
    name: "rose",
    values: [
        "oklch(0.9694 0.0152 12.42)",
        "oklch(0.9414 0.0298 12.58)",
        "oklch(0.8924 0.0559 10.00)",
        "oklch(0.8097 0.1061 11.64)",
        "oklch(0.7192 0.1690 13.43)",
        "oklch(0.6450 0.2154 16.44)",
        "oklch(0.5858 0.2220 17.58)",
        "oklch(0.5143 0.1978 16.93)",
        "oklch(0.4546 0.1713 13.70)",
        "oklch(0.4103 0.1502 10.27)",
        "oklch(0.2708 0.1009 12.09)",
    ],
};

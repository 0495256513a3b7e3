//! The static named-color table.
//!
//! Declaration order here is the canonical display order of the catalog:
//! family blocks in Material documentation order (base token first, then the
//! 50-900 shades, then the accent variants where the family has them),
//! followed by the black/white opacity variants and TRANSPARENT.
//!
//! Values are lowercase hex tokens; the opacity variants use the 8-digit
//! `#aarrggbb` form.

/// Identifier/value pairs for every color the browser knows about.
pub(crate) const PALETTE: &[(&str, &str)] = &[
    // Red
    ("RED", "#f44336"),
    ("RED_50", "#ffebee"),
    ("RED_100", "#ffcdd2"),
    ("RED_200", "#ef9a9a"),
    ("RED_300", "#e57373"),
    ("RED_400", "#ef5350"),
    ("RED_500", "#f44336"),
    ("RED_600", "#e53935"),
    ("RED_700", "#d32f2f"),
    ("RED_800", "#c62828"),
    ("RED_900", "#b71c1c"),
    ("RED_ACCENT", "#ff5252"),
    ("RED_ACCENT_100", "#ff8a80"),
    ("RED_ACCENT_200", "#ff5252"),
    ("RED_ACCENT_400", "#ff1744"),
    ("RED_ACCENT_700", "#d50000"),
    // Pink
    ("PINK", "#e91e63"),
    ("PINK_50", "#fce4ec"),
    ("PINK_100", "#f8bbd0"),
    ("PINK_200", "#f48fb1"),
    ("PINK_300", "#f06292"),
    ("PINK_400", "#ec407a"),
    ("PINK_500", "#e91e63"),
    ("PINK_600", "#d81b60"),
    ("PINK_700", "#c2185b"),
    ("PINK_800", "#ad1457"),
    ("PINK_900", "#880e4f"),
    ("PINK_ACCENT", "#ff4081"),
    ("PINK_ACCENT_100", "#ff80ab"),
    ("PINK_ACCENT_200", "#ff4081"),
    ("PINK_ACCENT_400", "#f50057"),
    ("PINK_ACCENT_700", "#c51162"),
    // Purple
    ("PURPLE", "#9c27b0"),
    ("PURPLE_50", "#f3e5f5"),
    ("PURPLE_100", "#e1bee7"),
    ("PURPLE_200", "#ce93d8"),
    ("PURPLE_300", "#ba68c8"),
    ("PURPLE_400", "#ab47bc"),
    ("PURPLE_500", "#9c27b0"),
    ("PURPLE_600", "#8e24aa"),
    ("PURPLE_700", "#7b1fa2"),
    ("PURPLE_800", "#6a1b9a"),
    ("PURPLE_900", "#4a148c"),
    ("PURPLE_ACCENT", "#e040fb"),
    ("PURPLE_ACCENT_100", "#ea80fc"),
    ("PURPLE_ACCENT_200", "#e040fb"),
    ("PURPLE_ACCENT_400", "#d500f9"),
    ("PURPLE_ACCENT_700", "#aa00ff"),
    // Deep Purple
    ("DEEP_PURPLE", "#673ab7"),
    ("DEEP_PURPLE_50", "#ede7f6"),
    ("DEEP_PURPLE_100", "#d1c4e9"),
    ("DEEP_PURPLE_200", "#b39ddb"),
    ("DEEP_PURPLE_300", "#9575cd"),
    ("DEEP_PURPLE_400", "#7e57c2"),
    ("DEEP_PURPLE_500", "#673ab7"),
    ("DEEP_PURPLE_600", "#5e35b1"),
    ("DEEP_PURPLE_700", "#512da8"),
    ("DEEP_PURPLE_800", "#4527a0"),
    ("DEEP_PURPLE_900", "#311b92"),
    ("DEEP_PURPLE_ACCENT", "#7c4dff"),
    ("DEEP_PURPLE_ACCENT_100", "#b388ff"),
    ("DEEP_PURPLE_ACCENT_200", "#7c4dff"),
    ("DEEP_PURPLE_ACCENT_400", "#651fff"),
    ("DEEP_PURPLE_ACCENT_700", "#6200ea"),
    // Indigo
    ("INDIGO", "#3f51b5"),
    ("INDIGO_50", "#e8eaf6"),
    ("INDIGO_100", "#c5cae9"),
    ("INDIGO_200", "#9fa8da"),
    ("INDIGO_300", "#7986cb"),
    ("INDIGO_400", "#5c6bc0"),
    ("INDIGO_500", "#3f51b5"),
    ("INDIGO_600", "#3949ab"),
    ("INDIGO_700", "#303f9f"),
    ("INDIGO_800", "#283593"),
    ("INDIGO_900", "#1a237e"),
    ("INDIGO_ACCENT", "#536dfe"),
    ("INDIGO_ACCENT_100", "#8c9eff"),
    ("INDIGO_ACCENT_200", "#536dfe"),
    ("INDIGO_ACCENT_400", "#3d5afe"),
    ("INDIGO_ACCENT_700", "#304ffe"),
    // Blue
    ("BLUE", "#2196f3"),
    ("BLUE_50", "#e3f2fd"),
    ("BLUE_100", "#bbdefb"),
    ("BLUE_200", "#90caf9"),
    ("BLUE_300", "#64b5f6"),
    ("BLUE_400", "#42a5f5"),
    ("BLUE_500", "#2196f3"),
    ("BLUE_600", "#1e88e5"),
    ("BLUE_700", "#1976d2"),
    ("BLUE_800", "#1565c0"),
    ("BLUE_900", "#0d47a1"),
    ("BLUE_ACCENT", "#448aff"),
    ("BLUE_ACCENT_100", "#82b1ff"),
    ("BLUE_ACCENT_200", "#448aff"),
    ("BLUE_ACCENT_400", "#2979ff"),
    ("BLUE_ACCENT_700", "#2962ff"),
    // Light Blue
    ("LIGHT_BLUE", "#03a9f4"),
    ("LIGHT_BLUE_50", "#e1f5fe"),
    ("LIGHT_BLUE_100", "#b3e5fc"),
    ("LIGHT_BLUE_200", "#81d4fa"),
    ("LIGHT_BLUE_300", "#4fc3f7"),
    ("LIGHT_BLUE_400", "#29b6f6"),
    ("LIGHT_BLUE_500", "#03a9f4"),
    ("LIGHT_BLUE_600", "#039be5"),
    ("LIGHT_BLUE_700", "#0288d1"),
    ("LIGHT_BLUE_800", "#0277bd"),
    ("LIGHT_BLUE_900", "#01579b"),
    ("LIGHT_BLUE_ACCENT", "#40c4ff"),
    ("LIGHT_BLUE_ACCENT_100", "#80d8ff"),
    ("LIGHT_BLUE_ACCENT_200", "#40c4ff"),
    ("LIGHT_BLUE_ACCENT_400", "#00b0ff"),
    ("LIGHT_BLUE_ACCENT_700", "#0091ea"),
    // Cyan
    ("CYAN", "#00bcd4"),
    ("CYAN_50", "#e0f7fa"),
    ("CYAN_100", "#b2ebf2"),
    ("CYAN_200", "#80deea"),
    ("CYAN_300", "#4dd0e1"),
    ("CYAN_400", "#26c6da"),
    ("CYAN_500", "#00bcd4"),
    ("CYAN_600", "#00acc1"),
    ("CYAN_700", "#0097a7"),
    ("CYAN_800", "#00838f"),
    ("CYAN_900", "#006064"),
    ("CYAN_ACCENT", "#18ffff"),
    ("CYAN_ACCENT_100", "#84ffff"),
    ("CYAN_ACCENT_200", "#18ffff"),
    ("CYAN_ACCENT_400", "#00e5ff"),
    ("CYAN_ACCENT_700", "#00b8d4"),
    // Teal
    ("TEAL", "#009688"),
    ("TEAL_50", "#e0f2f1"),
    ("TEAL_100", "#b2dfdb"),
    ("TEAL_200", "#80cbc4"),
    ("TEAL_300", "#4db6ac"),
    ("TEAL_400", "#26a69a"),
    ("TEAL_500", "#009688"),
    ("TEAL_600", "#00897b"),
    ("TEAL_700", "#00796b"),
    ("TEAL_800", "#00695c"),
    ("TEAL_900", "#004d40"),
    ("TEAL_ACCENT", "#64ffda"),
    ("TEAL_ACCENT_100", "#a7ffeb"),
    ("TEAL_ACCENT_200", "#64ffda"),
    ("TEAL_ACCENT_400", "#1de9b6"),
    ("TEAL_ACCENT_700", "#00bfa5"),
    // Green
    ("GREEN", "#4caf50"),
    ("GREEN_50", "#e8f5e9"),
    ("GREEN_100", "#c8e6c9"),
    ("GREEN_200", "#a5d6a7"),
    ("GREEN_300", "#81c784"),
    ("GREEN_400", "#66bb6a"),
    ("GREEN_500", "#4caf50"),
    ("GREEN_600", "#43a047"),
    ("GREEN_700", "#388e3c"),
    ("GREEN_800", "#2e7d32"),
    ("GREEN_900", "#1b5e20"),
    ("GREEN_ACCENT", "#69f0ae"),
    ("GREEN_ACCENT_100", "#b9f6ca"),
    ("GREEN_ACCENT_200", "#69f0ae"),
    ("GREEN_ACCENT_400", "#00e676"),
    ("GREEN_ACCENT_700", "#00c853"),
    // Light Green
    ("LIGHT_GREEN", "#8bc34a"),
    ("LIGHT_GREEN_50", "#f1f8e9"),
    ("LIGHT_GREEN_100", "#dcedc8"),
    ("LIGHT_GREEN_200", "#c5e1a5"),
    ("LIGHT_GREEN_300", "#aed581"),
    ("LIGHT_GREEN_400", "#9ccc65"),
    ("LIGHT_GREEN_500", "#8bc34a"),
    ("LIGHT_GREEN_600", "#7cb342"),
    ("LIGHT_GREEN_700", "#689f38"),
    ("LIGHT_GREEN_800", "#558b2f"),
    ("LIGHT_GREEN_900", "#33691e"),
    ("LIGHT_GREEN_ACCENT", "#b2ff59"),
    ("LIGHT_GREEN_ACCENT_100", "#ccff90"),
    ("LIGHT_GREEN_ACCENT_200", "#b2ff59"),
    ("LIGHT_GREEN_ACCENT_400", "#76ff03"),
    ("LIGHT_GREEN_ACCENT_700", "#64dd17"),
    // Lime
    ("LIME", "#cddc39"),
    ("LIME_50", "#f9fbe7"),
    ("LIME_100", "#f0f4c3"),
    ("LIME_200", "#e6ee9c"),
    ("LIME_300", "#dce775"),
    ("LIME_400", "#d4e157"),
    ("LIME_500", "#cddc39"),
    ("LIME_600", "#c0ca33"),
    ("LIME_700", "#afb42b"),
    ("LIME_800", "#9e9d24"),
    ("LIME_900", "#827717"),
    ("LIME_ACCENT", "#eeff41"),
    ("LIME_ACCENT_100", "#f4ff81"),
    ("LIME_ACCENT_200", "#eeff41"),
    ("LIME_ACCENT_400", "#c6ff00"),
    ("LIME_ACCENT_700", "#aeea00"),
    // Yellow
    ("YELLOW", "#ffeb3b"),
    ("YELLOW_50", "#fffde7"),
    ("YELLOW_100", "#fff9c4"),
    ("YELLOW_200", "#fff59d"),
    ("YELLOW_300", "#fff176"),
    ("YELLOW_400", "#ffee58"),
    ("YELLOW_500", "#ffeb3b"),
    ("YELLOW_600", "#fdd835"),
    ("YELLOW_700", "#fbc02d"),
    ("YELLOW_800", "#f9a825"),
    ("YELLOW_900", "#f57f17"),
    ("YELLOW_ACCENT", "#ffff00"),
    ("YELLOW_ACCENT_100", "#ffff8d"),
    ("YELLOW_ACCENT_200", "#ffff00"),
    ("YELLOW_ACCENT_400", "#ffea00"),
    ("YELLOW_ACCENT_700", "#ffd600"),
    // Amber
    ("AMBER", "#ffc107"),
    ("AMBER_50", "#fff8e1"),
    ("AMBER_100", "#ffecb3"),
    ("AMBER_200", "#ffe082"),
    ("AMBER_300", "#ffd54f"),
    ("AMBER_400", "#ffca28"),
    ("AMBER_500", "#ffc107"),
    ("AMBER_600", "#ffb300"),
    ("AMBER_700", "#ffa000"),
    ("AMBER_800", "#ff8f00"),
    ("AMBER_900", "#ff6f00"),
    ("AMBER_ACCENT", "#ffd740"),
    ("AMBER_ACCENT_100", "#ffe57f"),
    ("AMBER_ACCENT_200", "#ffd740"),
    ("AMBER_ACCENT_400", "#ffc400"),
    ("AMBER_ACCENT_700", "#ffab00"),
    // Orange
    ("ORANGE", "#ff9800"),
    ("ORANGE_50", "#fff3e0"),
    ("ORANGE_100", "#ffe0b2"),
    ("ORANGE_200", "#ffcc80"),
    ("ORANGE_300", "#ffb74d"),
    ("ORANGE_400", "#ffa726"),
    ("ORANGE_500", "#ff9800"),
    ("ORANGE_600", "#fb8c00"),
    ("ORANGE_700", "#f57c00"),
    ("ORANGE_800", "#ef6c00"),
    ("ORANGE_900", "#e65100"),
    ("ORANGE_ACCENT", "#ffab40"),
    ("ORANGE_ACCENT_100", "#ffd180"),
    ("ORANGE_ACCENT_200", "#ffab40"),
    ("ORANGE_ACCENT_400", "#ff9100"),
    ("ORANGE_ACCENT_700", "#ff6d00"),
    // Deep Orange
    ("DEEP_ORANGE", "#ff5722"),
    ("DEEP_ORANGE_50", "#fbe9e7"),
    ("DEEP_ORANGE_100", "#ffccbc"),
    ("DEEP_ORANGE_200", "#ffab91"),
    ("DEEP_ORANGE_300", "#ff8a65"),
    ("DEEP_ORANGE_400", "#ff7043"),
    ("DEEP_ORANGE_500", "#ff5722"),
    ("DEEP_ORANGE_600", "#f4511e"),
    ("DEEP_ORANGE_700", "#e64a19"),
    ("DEEP_ORANGE_800", "#d84315"),
    ("DEEP_ORANGE_900", "#bf360c"),
    ("DEEP_ORANGE_ACCENT", "#ff6e40"),
    ("DEEP_ORANGE_ACCENT_100", "#ff9e80"),
    ("DEEP_ORANGE_ACCENT_200", "#ff6e40"),
    ("DEEP_ORANGE_ACCENT_400", "#ff3d00"),
    ("DEEP_ORANGE_ACCENT_700", "#dd2c00"),
    // Brown
    ("BROWN", "#795548"),
    ("BROWN_50", "#efebe9"),
    ("BROWN_100", "#d7ccc8"),
    ("BROWN_200", "#bcaaa4"),
    ("BROWN_300", "#a1887f"),
    ("BROWN_400", "#8d6e63"),
    ("BROWN_500", "#795548"),
    ("BROWN_600", "#6d4c41"),
    ("BROWN_700", "#5d4037"),
    ("BROWN_800", "#4e342e"),
    ("BROWN_900", "#3e2723"),
    // Grey
    ("GREY", "#9e9e9e"),
    ("GREY_50", "#fafafa"),
    ("GREY_100", "#f5f5f5"),
    ("GREY_200", "#eeeeee"),
    ("GREY_300", "#e0e0e0"),
    ("GREY_400", "#bdbdbd"),
    ("GREY_500", "#9e9e9e"),
    ("GREY_600", "#757575"),
    ("GREY_700", "#616161"),
    ("GREY_800", "#424242"),
    ("GREY_900", "#212121"),
    // Blue Grey
    ("BLUE_GREY", "#607d8b"),
    ("BLUE_GREY_50", "#eceff1"),
    ("BLUE_GREY_100", "#cfd8dc"),
    ("BLUE_GREY_200", "#b0bec5"),
    ("BLUE_GREY_300", "#90a4ae"),
    ("BLUE_GREY_400", "#78909c"),
    ("BLUE_GREY_500", "#607d8b"),
    ("BLUE_GREY_600", "#546e7a"),
    ("BLUE_GREY_700", "#455a64"),
    ("BLUE_GREY_800", "#37474f"),
    ("BLUE_GREY_900", "#263238"),
    // Black and white opacity variants
    ("BLACK", "#000000"),
    ("BLACK_12", "#1f000000"),
    ("BLACK_26", "#42000000"),
    ("BLACK_38", "#61000000"),
    ("BLACK_45", "#73000000"),
    ("BLACK_54", "#8a000000"),
    ("BLACK_87", "#de000000"),
    ("WHITE", "#ffffff"),
    ("WHITE_10", "#1affffff"),
    ("WHITE_12", "#1fffffff"),
    ("WHITE_24", "#3dffffff"),
    ("WHITE_30", "#4dffffff"),
    ("WHITE_38", "#62ffffff"),
    ("WHITE_54", "#8affffff"),
    ("WHITE_60", "#99ffffff"),
    ("WHITE_70", "#b3ffffff"),
    ("TRANSPARENT", "#00000000"),
];

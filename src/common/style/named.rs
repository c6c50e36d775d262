//! Named web colors.
//!
//! The extended HTML/CSS color keywords, keyed by their lowercase spelling.

use phf::phf_map;

use super::color::RGBColor;

/// Lowercase color keyword to RGB value.
static NAMED_COLORS: phf::Map<&'static str, RGBColor> = phf_map! {
    "aliceblue" => RGBColor::new(240, 248, 255),
    "antiquewhite" => RGBColor::new(250, 235, 215),
    "aqua" => RGBColor::new(0, 255, 255),
    "aquamarine" => RGBColor::new(127, 255, 212),
    "azure" => RGBColor::new(240, 255, 255),
    "beige" => RGBColor::new(245, 245, 220),
    "bisque" => RGBColor::new(255, 228, 196),
    "black" => RGBColor::new(0, 0, 0),
    "blanchedalmond" => RGBColor::new(255, 235, 205),
    "blue" => RGBColor::new(0, 0, 255),
    "blueviolet" => RGBColor::new(138, 43, 226),
    "brown" => RGBColor::new(165, 42, 42),
    "burlywood" => RGBColor::new(222, 184, 135),
    "cadetblue" => RGBColor::new(95, 158, 160),
    "chartreuse" => RGBColor::new(127, 255, 0),
    "chocolate" => RGBColor::new(210, 105, 30),
    "coral" => RGBColor::new(255, 127, 80),
    "cornflowerblue" => RGBColor::new(100, 149, 237),
    "cornsilk" => RGBColor::new(255, 248, 220),
    "crimson" => RGBColor::new(220, 20, 60),
    "cyan" => RGBColor::new(0, 255, 255),
    "darkblue" => RGBColor::new(0, 0, 139),
    "darkcyan" => RGBColor::new(0, 139, 139),
    "darkgoldenrod" => RGBColor::new(184, 134, 11),
    "darkgray" => RGBColor::new(169, 169, 169),
    "darkgreen" => RGBColor::new(0, 100, 0),
    "darkgrey" => RGBColor::new(169, 169, 169),
    "darkkhaki" => RGBColor::new(189, 183, 107),
    "darkmagenta" => RGBColor::new(139, 0, 139),
    "darkolivegreen" => RGBColor::new(85, 107, 47),
    "darkorange" => RGBColor::new(255, 140, 0),
    "darkorchid" => RGBColor::new(153, 50, 204),
    "darkred" => RGBColor::new(139, 0, 0),
    "darksalmon" => RGBColor::new(233, 150, 122),
    "darkseagreen" => RGBColor::new(143, 188, 143),
    "darkslateblue" => RGBColor::new(72, 61, 139),
    "darkslategray" => RGBColor::new(47, 79, 79),
    "darkslategrey" => RGBColor::new(47, 79, 79),
    "darkturquoise" => RGBColor::new(0, 206, 209),
    "darkviolet" => RGBColor::new(148, 0, 211),
    "deeppink" => RGBColor::new(255, 20, 147),
    "deepskyblue" => RGBColor::new(0, 191, 255),
    "dimgray" => RGBColor::new(105, 105, 105),
    "dimgrey" => RGBColor::new(105, 105, 105),
    "dodgerblue" => RGBColor::new(30, 144, 255),
    "firebrick" => RGBColor::new(178, 34, 34),
    "floralwhite" => RGBColor::new(255, 250, 240),
    "forestgreen" => RGBColor::new(34, 139, 34),
    "fuchsia" => RGBColor::new(255, 0, 255),
    "gainsboro" => RGBColor::new(220, 220, 220),
    "ghostwhite" => RGBColor::new(248, 248, 255),
    "gold" => RGBColor::new(255, 215, 0),
    "goldenrod" => RGBColor::new(218, 165, 32),
    "gray" => RGBColor::new(128, 128, 128),
    "green" => RGBColor::new(0, 128, 0),
    "greenyellow" => RGBColor::new(173, 255, 47),
    "grey" => RGBColor::new(128, 128, 128),
    "honeydew" => RGBColor::new(240, 255, 240),
    "hotpink" => RGBColor::new(255, 105, 180),
    "indianred" => RGBColor::new(205, 92, 92),
    "indigo" => RGBColor::new(75, 0, 130),
    "ivory" => RGBColor::new(255, 255, 240),
    "khaki" => RGBColor::new(240, 230, 140),
    "lavender" => RGBColor::new(230, 230, 250),
    "lavenderblush" => RGBColor::new(255, 240, 245),
    "lawngreen" => RGBColor::new(124, 252, 0),
    "lemonchiffon" => RGBColor::new(255, 250, 205),
    "lightblue" => RGBColor::new(173, 216, 230),
    "lightcoral" => RGBColor::new(240, 128, 128),
    "lightcyan" => RGBColor::new(224, 255, 255),
    "lightgoldenrodyellow" => RGBColor::new(250, 250, 210),
    "lightgray" => RGBColor::new(211, 211, 211),
    "lightgreen" => RGBColor::new(144, 238, 144),
    "lightgrey" => RGBColor::new(211, 211, 211),
    "lightpink" => RGBColor::new(255, 182, 193),
    "lightsalmon" => RGBColor::new(255, 160, 122),
    "lightseagreen" => RGBColor::new(32, 178, 170),
    "lightskyblue" => RGBColor::new(135, 206, 250),
    "lightslategray" => RGBColor::new(119, 136, 153),
    "lightslategrey" => RGBColor::new(119, 136, 153),
    "lightsteelblue" => RGBColor::new(176, 196, 222),
    "lightyellow" => RGBColor::new(255, 255, 224),
    "lime" => RGBColor::new(0, 255, 0),
    "limegreen" => RGBColor::new(50, 205, 50),
    "linen" => RGBColor::new(250, 240, 230),
    "magenta" => RGBColor::new(255, 0, 255),
    "maroon" => RGBColor::new(128, 0, 0),
    "mediumaquamarine" => RGBColor::new(102, 205, 170),
    "mediumblue" => RGBColor::new(0, 0, 205),
    "mediumorchid" => RGBColor::new(186, 85, 211),
    "mediumpurple" => RGBColor::new(147, 112, 219),
    "mediumseagreen" => RGBColor::new(60, 179, 113),
    "mediumslateblue" => RGBColor::new(123, 104, 238),
    "mediumspringgreen" => RGBColor::new(0, 250, 154),
    "mediumturquoise" => RGBColor::new(72, 209, 204),
    "mediumvioletred" => RGBColor::new(199, 21, 133),
    "midnightblue" => RGBColor::new(25, 25, 112),
    "mintcream" => RGBColor::new(245, 255, 250),
    "mistyrose" => RGBColor::new(255, 228, 225),
    "moccasin" => RGBColor::new(255, 228, 181),
    "navajowhite" => RGBColor::new(255, 222, 173),
    "navy" => RGBColor::new(0, 0, 128),
    "oldlace" => RGBColor::new(253, 245, 230),
    "olive" => RGBColor::new(128, 128, 0),
    "olivedrab" => RGBColor::new(107, 142, 35),
    "orange" => RGBColor::new(255, 165, 0),
    "orangered" => RGBColor::new(255, 69, 0),
    "orchid" => RGBColor::new(218, 112, 214),
    "palegoldenrod" => RGBColor::new(238, 232, 170),
    "palegreen" => RGBColor::new(152, 251, 152),
    "paleturquoise" => RGBColor::new(175, 238, 238),
    "palevioletred" => RGBColor::new(219, 112, 147),
    "papayawhip" => RGBColor::new(255, 239, 213),
    "peachpuff" => RGBColor::new(255, 218, 185),
    "peru" => RGBColor::new(205, 133, 63),
    "pink" => RGBColor::new(255, 192, 203),
    "plum" => RGBColor::new(221, 160, 221),
    "powderblue" => RGBColor::new(176, 224, 230),
    "purple" => RGBColor::new(128, 0, 128),
    "rebeccapurple" => RGBColor::new(102, 51, 153),
    "red" => RGBColor::new(255, 0, 0),
    "rosybrown" => RGBColor::new(188, 143, 143),
    "royalblue" => RGBColor::new(65, 105, 225),
    "saddlebrown" => RGBColor::new(139, 69, 19),
    "salmon" => RGBColor::new(250, 128, 114),
    "sandybrown" => RGBColor::new(244, 164, 96),
    "seagreen" => RGBColor::new(46, 139, 87),
    "seashell" => RGBColor::new(255, 245, 238),
    "sienna" => RGBColor::new(160, 82, 45),
    "silver" => RGBColor::new(192, 192, 192),
    "skyblue" => RGBColor::new(135, 206, 235),
    "slateblue" => RGBColor::new(106, 90, 205),
    "slategray" => RGBColor::new(112, 128, 144),
    "slategrey" => RGBColor::new(112, 128, 144),
    "snow" => RGBColor::new(255, 250, 250),
    "springgreen" => RGBColor::new(0, 255, 127),
    "steelblue" => RGBColor::new(70, 130, 180),
    "tan" => RGBColor::new(210, 180, 140),
    "teal" => RGBColor::new(0, 128, 128),
    "thistle" => RGBColor::new(216, 191, 216),
    "tomato" => RGBColor::new(255, 99, 71),
    "turquoise" => RGBColor::new(64, 224, 208),
    "violet" => RGBColor::new(238, 130, 238),
    "wheat" => RGBColor::new(245, 222, 179),
    "white" => RGBColor::new(255, 255, 255),
    "whitesmoke" => RGBColor::new(245, 245, 245),
    "yellow" => RGBColor::new(255, 255, 0),
    "yellowgreen" => RGBColor::new(154, 205, 50),
};

/// Look up a color keyword, ignoring ASCII case.
///
/// Returns `None` for unknown names. `transparent` is deliberately absent: it has
/// no RGB meaning once the alpha channel is dropped.
pub fn lookup(name: &str) -> Option<RGBColor> {
    if name.bytes().all(|b| b.is_ascii_lowercase()) {
        return NAMED_COLORS.get(name).copied();
    }
    NAMED_COLORS.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Number of known color keywords.
pub fn count() -> usize {
    NAMED_COLORS.len()
}

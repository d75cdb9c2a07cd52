//! The 8×8 letter sets `A` through `T`.
//!
//! [`CLEAN`] holds well-formed letters. [`NOISY`] holds the same letters
//! with roughly a quarter of their strokes knocked out.

use crate::error::Result;
use crate::glyph::Glyph;

/// Glyph height and width.
pub const SIZE: usize = 8;

/// Label of letter index `i` (`'A'` for 0).
pub fn label(index: usize) -> char {
    char::from_u32('A' as u32 + index as u32).unwrap_or('?')
}

/// Parse a whole letter set into glyphs, in alphabet order.
pub fn glyphs(set: &[[&str; SIZE]]) -> Result<Vec<Glyph>> {
    set.iter().map(|rows| Glyph::from_ascii(rows)).collect()
}

/// Clean letters `A`..`T`.
pub const CLEAN: [[&str; SIZE]; 20] = [
    [
        " ###### ",
        "#      #",
        "#      #",
        "########",
        "#      #",
        "#      #",
        "#      #",
        "#      #",
    ],
    [
        "####### ",
        "#      #",
        "#      #",
        "####### ",
        "#      #",
        "#      #",
        "####### ",
        "        ",
    ],
    [
        " ###### ",
        "#      #",
        "#       ",
        "#       ",
        "#       ",
        "#       ",
        "#      #",
        " ###### ",
    ],
    [
        "####### ",
        "#      #",
        "#      #",
        "#      #",
        "#      #",
        "#      #",
        "#      #",
        "####### ",
    ],
    [
        "########",
        "#       ",
        "#       ",
        "########",
        "#       ",
        "#       ",
        "#       ",
        "########",
    ],
    [
        "########",
        "#       ",
        "#       ",
        "########",
        "#       ",
        "#       ",
        "#       ",
        "#       ",
    ],
    [
        " ###### ",
        "#      #",
        "#       ",
        "#       ",
        "#    ###",
        "#      #",
        "#      #",
        " ###### ",
    ],
    [
        "#      #",
        "#      #",
        "#      #",
        "########",
        "#      #",
        "#      #",
        "#      #",
        "#      #",
    ],
    [
        "########",
        "   #    ",
        "   #    ",
        "   #    ",
        "   #    ",
        "   #    ",
        "   #    ",
        "########",
    ],
    [
        "########",
        "       #",
        "       #",
        "       #",
        "       #",
        "       #",
        "       #",
        "########",
    ],
    [
        "#     # ",
        "#   #   ",
        "# #     ",
        "#       ",
        "# #     ",
        "#   #   ",
        "#     # ",
        "#      #",
    ],
    [
        "#       ",
        "#       ",
        "#       ",
        "#       ",
        "#       ",
        "#       ",
        "#       ",
        "########",
    ],
    [
        "#      #",
        "# #   ##",
        "#  # # #",
        "#   #  #",
        "#      #",
        "#      #",
        "#      #",
        "#      #",
    ],
    [
        "#      #",
        "##     #",
        "# #    #",
        "#  #   #",
        "#   #  #",
        "#    # #",
        "#      #",
        "#      #",
    ],
    [
        "########",
        "#      #",
        "#      #",
        "#      #",
        "#      #",
        "#      #",
        "#      #",
        "########",
    ],
    [
        "########",
        "#      #",
        "#      #",
        "########",
        "#       ",
        "#       ",
        "#       ",
        "#       ",
    ],
    [
        "########",
        "##     #",
        "# #    #",
        "#  #   #",
        "#   #  #",
        "#    # #",
        "#     ##",
        "########",
    ],
    [
        "########",
        "#    ## ",
        "# ##     ",
        "###      ",
        "# ##    ",
        "#  ##   ",
        "#    ## ",
        "#     ##",
    ],
    [
        "########",
        "#       ",
        "#       ",
        "########",
        "       #",
        "       #",
        "       #",
        "########",
    ],
    [
        "########",
        "   #    ",
        "   #    ",
        "   #    ",
        "   #    ",
        "   #    ",
        "   #    ",
        "   #    ",
    ],
];

/// Letters `A`..`T` with about 25% of their strokes missing.
pub const NOISY: [[&str; SIZE]; 20] = [
    [
        " #    # ",
        "#      #",
        "       #",
        "   #   #",
        "#      #",
        "#      #",
        "        ",
        "#      #",
    ],
    [
        "#  #  # ",
        "       #",
        "       #",
        "#   # # ",
        "#      #",
        "#      #",
        "# ##  # ",
        "        ",
    ],
    [
        " #  # # ",
        "#       ",
        "        ",
        "#       ",
        "        ",
        "#       ",
        "#      #",
        "  # # # ",
    ],
    [
        "# #  ## ",
        "#       ",
        "       #",
        "#      #",
        "        ",
        "#       ",
        "#      #",
        "# # # # ",
    ],
    [
        "#  #  ##",
        "#       ",
        "#       ",
        "#  # #  ",
        "        ",
        "#       ",
        "#       ",
        "##  #  #",
    ],
    [
        "#  #  ##",
        "        ",
        "#       ",
        "# # # ##",
        "        ",
        "        ",
        "#       ",
        "#       ",
    ],
    [
        " #  # # ",
        "#      #",
        "        ",
        "#       ",
        "      ##",
        "       #",
        "#      #",
        " #  # # ",
    ],
    [
        "#      #",
        "        ",
        "#      #",
        "#  #  # ",
        "#      #",
        "        ",
        "       #",
        "#      #",
    ],
    [
        "# #    #",
        "   #    ",
        "   #    ",
        "        ",
        "        ",
        "   #    ",
        "   #    ",
        "##  # ##",
    ],
    [
        "##  #  #",
        "       #",
        "        ",
        "       #",
        "        ",
        "       #",
        "       #",
        "#  ##   ",
    ],
    [
        "#    #  ",
        "    #   ",
        "# #     ",
        "#       ",
        "  #     ",
        "#   #   ",
        "        ",
        "#     ##",
    ],
    [
        "#       ",
        "        ",
        "#       ",
        "#       ",
        "        ",
        "        ",
        "#       ",
        "#    # #",
    ],
    [
        "#      #",
        "        ",
        "#  # #  ",
        "       #",
        "#       ",
        "#      #",
        "        ",
        "#      #",
    ],
    [
        "#      #",
        " #      ",
        "       #",
        "#  #    ",
        "       #",
        "#    #  ",
        "        ",
        "#      #",
    ],
    [
        "##   #  ",
        "#      #",
        "#      #",
        "       #",
        "#       ",
        "#      #",
        "#       ",
        "###   ##",
    ],
    [
        "#  ###  ",
        "#      #",
        "#       ",
        "#  #   #",
        "#       ",
        "        ",
        "#       ",
        "        ",
    ],
    [
        "## # # #",
        "##     #",
        "#       ",
        "#  #   #",
        "    #  #",
        "#       ",
        "       #",
        "#  #  ##",
    ],
    [
        "#  # # #",
        "#     # ",
        "   #     ",
        "# #      ",
        "# #     ",
        "#  #    ",
        "      # ",
        "#      #",
    ],
    [
        "##  #  #",
        "#       ",
        "        ",
        "#   #  #",
        "       #",
        "        ",
        "       #",
        "# # # ##",
    ],
    [
        "# #   # ",
        "   #    ",
        "   #    ",
        "        ",
        "   #    ",
        "        ",
        "        ",
        "   #    ",
    ],
];

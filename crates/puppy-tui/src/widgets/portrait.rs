//! Resolves image references to terminal art
//!
//! The catalog only carries opaque asset keys; this is where the TUI turns
//! them into something drawable.

use puppy_core::ImageRef;

/// Rows every portrait occupies
pub const PORTRAIT_HEIGHT: u16 = 4;

const DOG1: [&str; 4] = [
    r"   __      _",
    r" o'')}____//",
    r"  `_/      )",
    r"  (_(_/-(_/",
];

const DOG2: [&str; 4] = [
    r"  / \__",
    r" (    @\___",
    r" /         O",
    r"/   (_____/",
];

const DOG3: [&str; 4] = [
    r"  ,-.___,-.",
    r"  \_/_ _\_/",
    r"    )O_O(",
    r"   { (_) }",
];

const DOG4: [&str; 4] = [
    r"   __",
    r"  (___()'`;",
    r"  /,    /`",
    r#"  \\"--\\"#,
];

const MISSING: [&str; 4] = [
    "┌─────────┐",
    "│  no     │",
    "│  image  │",
    "└─────────┘",
];

/// Art for an image reference; unknown keys get a placeholder frame.
pub fn portrait(image: &ImageRef) -> &'static [&'static str] {
    match image.key() {
        "dog1" => &DOG1,
        "dog2" => &DOG2,
        "dog3" => &DOG3,
        "dog4" => &DOG4,
        _ => &MISSING,
    }
}

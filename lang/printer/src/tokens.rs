//! This module contains the symbols and keywords of Go.
//! These constants are used when we prettyprint generated source code.

// Symbols
//
//

/// The symbol `.`
pub const DOT: &str = ".";

/// The symbol `*`
pub const STAR: &str = "*";

/// The symbol `...`
pub const ELLIPSIS: &str = "...";

/// The symbol `|`
pub const PIPE: &str = "|";

/// The symbol `~`
pub const TILDE: &str = "~";

/// The symbol `<-`
pub const ARROW: &str = "<-";

// Keywords
//
//

/// The keyword `package`
pub const PACKAGE: &str = "package";

/// The keyword `import`
pub const IMPORT: &str = "import";

/// The keyword `type`
pub const TYPE: &str = "type";

/// The keyword `interface`
pub const INTERFACE: &str = "interface";

/// The keyword `func`
pub const FUNC: &str = "func";

/// The keyword `map`
pub const MAP: &str = "map";

/// The keyword `chan`
pub const CHAN: &str = "chan";

/// All reserved words of Go. None of them can be used as an identifier.
pub const KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

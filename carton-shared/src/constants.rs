//! Shared constants of the text encoding.
//!
//! Encoders and decoders on both sides of a round trip must agree on these.

/// Structural marks of the grammar.
pub mod marks {
    /// Opens a value.
    pub const BEGIN: char = '{';

    /// Closes a value.
    pub const END: char = '}';

    /// Separates a field name from its scalar.
    pub const VALUE: char = ':';

    /// Separates two fields.
    pub const SEPARATOR: char = ',';
}

/// Boolean literals.
pub mod literals {
    pub const TRUE: &str = "true";
    pub const FALSE: &str = "false";
}

/// Field names, grouped by the value that owns them.
pub mod fields {
    pub mod carton {
        pub const ID: &str = "id";
        pub const IS_OPEN: &str = "is_open";
        pub const ITEM: &str = "item";
        pub const SIZE: &str = "size";
    }

    pub mod dimensions {
        pub const LENGTH: &str = "length";
        pub const WIDTH: &str = "width";
        pub const HEIGHT: &str = "height";
    }
}

/// Environment variables understood by the command-line front end.
pub mod envs {
    /// Path of the options file (JSON or YAML).
    pub const CONFIG: &str = "CARTON_CONFIG";
}

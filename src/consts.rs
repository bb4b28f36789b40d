pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Constants for config file resolution and dashboard geometry.

    // =============================================================================
    // CONFIGURATION FILES
    // =============================================================================

    /// Directory under the user's home holding the dashboard config.
    pub const CONFIG_DIR: &str = ".seo-dashboard";

    /// Name of the config file inside [`CONFIG_DIR`].
    pub const CONFIG_FILE: &str = "config.json";

    // =============================================================================
    // LAYOUT CONFIGURATION
    // =============================================================================

    /// Dashboard geometry, in terminal cells
    pub mod layout {
        /// Height of the theme picker row.
        pub const PICKER_HEIGHT: u16 = 3;

        /// Preferred width of a single theme button.
        pub const PICKER_BUTTON_WIDTH: u16 = 18;

        /// Height of a path card: border, title, spacer, progress label,
        /// progress bar, border.
        pub const CARD_HEIGHT: u16 = 6;

        /// Height of a path card on short terminals: border, title,
        /// progress label and bar on one line, border.
        pub const COMPACT_CARD_HEIGHT: u16 = 4;

        /// Height of the key binding footer.
        pub const FOOTER_HEIGHT: u16 = 1;

        /// Minimum width for the four-column card grid.
        pub const WIDE_MIN_WIDTH: u16 = 100;

        /// Minimum width for the two-column card grid.
        pub const MEDIUM_MIN_WIDTH: u16 = 60;

        /// Blank cells between adjacent widgets.
        pub const GAP: u16 = 1;
    }
}

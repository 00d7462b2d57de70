pub struct Config {
    /// Lowers the amount of output, one step per `-q`.
    ///
    /// Level 1 drops headers, level 2 prints nothing but the SQL.
    pub quiet: u8,
    /// Reports which geometry variant the pipeline selected.
    pub explain: bool,
}

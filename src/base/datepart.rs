/// Calendar unit for rounding and shifting dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datepart {
    Year,
    Month,
}

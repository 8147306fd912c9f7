use crate::base;

const COLUMN_GAP: &str = "  ";
const DATE_HEADER: &str = "Date";
const TIME_HEADER: &str = "Time";
const DESCRIPTION_HEADER: &str = "Description";
const VENDOR_HEADER: &str = "Vendor";
const AMOUNT_HEADER: &str = "Amount";
const DATE_CHARLEN: usize = 10; // yyyy-mm-dd
const TIME_CHARLEN: usize = 8; // hh:mm:ss

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub title: String,
    pub term_width: usize,
    pub ledger: base::Ledger,
}

impl Config {
    pub fn to_table(&self) -> Table<'_> {
        let mut description = DESCRIPTION_HEADER.len();
        let mut vendor = VENDOR_HEADER.len();
        let mut amount = AMOUNT_HEADER.len();
        for t in self.ledger.iter() {
            description = description.max(base::util::charlen(t.description()));
            vendor = vendor.max(base::util::charlen(t.vendor()));
            amount = amount.max(t.amount().to_string().len());
        }
        amount = amount.max(self.ledger.total().to_string().len());

        // Shrink the wider text column until the table fits.
        let max_width = self.term_width.max(base::util::MIN_TERM_WIDTH);
        let fixed = DATE_CHARLEN + TIME_CHARLEN + amount + 4 * COLUMN_GAP.len();
        while fixed + description + vendor > max_width {
            if description >= vendor && description > DESCRIPTION_HEADER.len() {
                description -= 1;
            } else if vendor > VENDOR_HEADER.len() {
                vendor -= 1;
            } else if description > DESCRIPTION_HEADER.len() {
                description -= 1;
            } else {
                break;
            }
        }

        Table {
            config: self,
            widths: Widths {
                description,
                vendor,
                amount,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Widths {
    description: usize,
    vendor: usize,
    amount: usize,
}

impl Widths {
    fn total(self) -> usize {
        DATE_CHARLEN
            + TIME_CHARLEN
            + self.description
            + self.vendor
            + self.amount
            + 4 * COLUMN_GAP.len()
    }
}

pub struct Table<'a> {
    config: &'a Config,
    widths: Widths,
}

impl Table<'_> {
    /// Cuts `s` down to `width` characters, marking the cut with the charset's
    /// ellipsis.
    fn fit(&self, s: &str, width: usize) -> String {
        if base::util::charlen(s) <= width {
            return s.to_string();
        }
        let ellipsis = self.config.charset.ellipsis;
        let keep = width.saturating_sub(base::util::charlen(ellipsis));
        let mut out = s.chars().take(keep).collect::<String>();
        out.push_str(ellipsis);
        out
    }

    fn paint_amount(&self, cell: String, amount: base::Cents) -> String {
        if !self.config.charset.color {
            return cell;
        }
        if amount.is_negative() {
            colored::Colorize::red(cell.as_str()).to_string()
        } else {
            colored::Colorize::green(cell.as_str()).to_string()
        }
    }

    fn write_title(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = self.config.title.to_uppercase();
        if self.config.charset.color {
            writeln!(f, "{}", colored::Colorize::bold(title.as_str()))
        } else {
            writeln!(f, "{}", title)
        }
    }

    fn write_rule(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = std::iter::repeat_n(self.config.charset.rule, self.widths.total())
            .collect::<String>();
        writeln!(f, "{}", rule)
    }

    fn write_row(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        cells: [&str; 4],
        amount: String,
    ) -> std::fmt::Result {
        let [date, time, description, vendor] = cells;
        let w = self.widths;
        let line = format!(
            "{:<dw$}{gap}{:<tw$}{gap}{:<desw$}{gap}{:<vw$}{gap}",
            date,
            time,
            self.fit(description, w.description),
            self.fit(vendor, w.vendor),
            gap = COLUMN_GAP,
            dw = DATE_CHARLEN,
            tw = TIME_CHARLEN,
            desw = w.description,
            vw = w.vendor,
        );
        writeln!(f, "{}{}", line, amount)
    }
}

impl std::fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_title(f)?;
        if self.config.ledger.is_empty() {
            return writeln!(f, "No transactions.");
        }

        let aw = self.widths.amount;
        self.write_row(
            f,
            [DATE_HEADER, TIME_HEADER, DESCRIPTION_HEADER, VENDOR_HEADER],
            format!("{:>aw$}", AMOUNT_HEADER),
        )?;
        self.write_rule(f)?;
        for t in self.config.ledger.iter() {
            let date = t.date().to_string();
            let time = t.time().to_string();
            let amount = self.paint_amount(format!("{:>aw$}", t.amount()), t.amount());
            self.write_row(f, [&date, &time, t.description(), t.vendor()], amount)?;
        }
        self.write_rule(f)?;

        let count = match self.config.ledger.len() {
            1 => "1 transaction".to_string(),
            n => format!("{} transactions", n),
        };
        let total = self.config.ledger.total();
        let label = "Total ";
        let pad = self
            .widths
            .total()
            .saturating_sub(count.len() + label.len() + aw)
            .max(1);
        let amount = self.paint_amount(format!("{:>aw$}", total), total);
        writeln!(f, "{}{}{}{}", count, " ".repeat(pad), label, amount)
    }
}

//! View model for a SOL amount rendered next to its USD value.
//!
//! The label follows an external SOL price and recomputes `amount * price` whenever the price or
//! the amount changes. Amounts that are not numbers are a normal state: the SOL statistic is
//! hidden and the USD line shows a placeholder instead.

use std::fmt;

pub const PLACEHOLDER_LABEL: &str = "Place Bid";

pub const SOL_SUFFIX: &str = "SOL";

/// An amount as entered, either a number or text that may not parse as one.
///
/// Parsing is strict: text must parse as a whole (`"12abc"` is not 12), and infinities count as
/// non-numeric alongside NaN, so `"inf"` renders the placeholder rather than an unbounded value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Amount(f64);

impl Amount {
    /// The numeric value, `None` for NaN and infinities.
    pub fn value(&self) -> Option<f64> {
        if self.0.is_finite() {
            Some(self.0)
        } else {
            None
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.value().is_some()
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount(value.trim().parse().unwrap_or(f64::NAN))
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::from(value.as_str())
    }
}

/// Source of the current SOL/USD exchange rate.
pub trait PriceFeed {
    fn sol_price(&self) -> f64;
}

/// A feed that never moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticPriceFeed(pub f64);

impl PriceFeed for StaticPriceFeed {
    fn sol_price(&self) -> f64 {
        self.0
    }
}

pub trait CurrencyFormatter {
    fn format(&self, value: f64) -> String;
}

/// Formats as US dollars with two decimals and comma grouping, e.g. `$1,234.50`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UsdFormatter;

impl CurrencyFormatter for UsdFormatter {
    fn format(&self, value: f64) -> String {
        let fixed = format!("{:.2}", value.abs());
        let (whole, cents) = fixed.split_at(fixed.len() - 3);

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
        format!("{}${}{}", sign, grouped, cents)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmountLabelOptions {
    pub display_usd: bool,
    pub title: String,
}

impl Default for AmountLabelOptions {
    fn default() -> Self {
        AmountLabelOptions {
            display_usd: true,
            title: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolStatistic {
    pub title: String,
    pub value: f64,
    pub suffix: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UsdLine {
    Amount(String),
    Placeholder(&'static str),
}

/// What a label shows for its current state.
#[derive(Clone, Debug, PartialEq)]
pub struct AmountLabelView {
    pub statistic: Option<SolStatistic>,
    pub usd: Option<UsdLine>,
}

impl fmt::Display for AmountLabelView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(statistic) = &self.statistic {
            if !statistic.title.is_empty() {
                write!(f, "{}: ", statistic.title)?;
            }
            write!(f, "{} {}", statistic.value, statistic.suffix)?;
            if self.usd.is_some() {
                write!(f, " ")?;
            }
        }
        match &self.usd {
            Some(UsdLine::Amount(usd)) => write!(f, "{}", usd),
            Some(UsdLine::Placeholder(label)) => write!(f, "{}", label),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AmountLabel {
    amount: Amount,
    options: AmountLabelOptions,
    price_usd: Option<f64>,
    last_price: Option<f64>,
    stale: bool,
}

impl AmountLabel {
    pub fn new<A: Into<Amount>>(amount: A, options: AmountLabelOptions) -> Self {
        AmountLabel {
            amount: amount.into(),
            options,
            price_usd: None,
            last_price: None,
            stale: true,
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// USD value computed at the last sync, if the amount was numeric.
    pub fn price_usd(&self) -> Option<f64> {
        self.price_usd
    }

    /// Changes the amount. The USD value follows on the next `sync`.
    pub fn set_amount<A: Into<Amount>>(&mut self, amount: A) {
        let amount = amount.into();
        if amount != self.amount {
            self.amount = amount;
            self.stale = true;
        }
    }

    /// Reads the feed and recomputes the USD value if the price or the amount changed since the
    /// last sync. Returns whether anything was recomputed.
    pub fn sync<F: PriceFeed + ?Sized>(&mut self, feed: &F) -> bool {
        let price = feed.sol_price();
        if !self.stale && self.last_price == Some(price) {
            return false;
        }

        self.price_usd = self.amount.value().map(|amount| amount * price);
        self.last_price = Some(price);
        self.stale = false;
        true
    }

    pub fn render<C: CurrencyFormatter + ?Sized>(&self, formatter: &C) -> AmountLabelView {
        let statistic = self.amount.value().map(|value| SolStatistic {
            title: self.options.title.clone(),
            value,
            suffix: SOL_SUFFIX,
        });

        let usd = if !self.options.display_usd {
            None
        } else if self.amount.is_numeric() {
            Some(UsdLine::Amount(
                formatter.format(self.price_usd.unwrap_or(0.0)),
            ))
        } else {
            Some(UsdLine::Placeholder(PLACEHOLDER_LABEL))
        };

        AmountLabelView { statistic, usd }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::cell::Cell};

    struct CountingFeed {
        price: Cell<f64>,
        reads: Cell<u32>,
    }

    impl PriceFeed for CountingFeed {
        fn sol_price(&self) -> f64 {
            self.reads.set(self.reads.get() + 1);
            self.price.get()
        }
    }

    #[test]
    fn usd_value_settles_after_sync() {
        let mut label = AmountLabel::new(2.0, AmountLabelOptions::default());
        assert_eq!(label.price_usd(), None);

        assert!(label.sync(&StaticPriceFeed(10.0)));
        assert_eq!(label.price_usd(), Some(20.0));

        let view = label.render(&UsdFormatter);
        assert_eq!(view.usd, Some(UsdLine::Amount("$20.00".to_string())));
        assert_eq!(
            view.statistic,
            Some(SolStatistic {
                title: String::new(),
                value: 2.0,
                suffix: SOL_SUFFIX,
            })
        );
    }

    #[test]
    fn non_numeric_amount_renders_placeholder() {
        let mut label = AmountLabel::new("abc", AmountLabelOptions::default());
        label.sync(&StaticPriceFeed(10.0));

        assert_eq!(label.price_usd(), None);
        let view = label.render(&UsdFormatter);
        assert_eq!(view.statistic, None);
        assert_eq!(view.usd, Some(UsdLine::Placeholder(PLACEHOLDER_LABEL)));
        assert_eq!(view.to_string(), "Place Bid");
    }

    #[test]
    fn hidden_usd_shows_neither_amount_nor_placeholder() {
        let options = AmountLabelOptions {
            display_usd: false,
            title: "Highest bid".to_string(),
        };
        let mut label = AmountLabel::new("abc", options.clone());
        label.sync(&StaticPriceFeed(10.0));
        assert_eq!(label.render(&UsdFormatter).usd, None);

        let mut label = AmountLabel::new("1.5", options);
        label.sync(&StaticPriceFeed(10.0));
        assert_eq!(label.render(&UsdFormatter).to_string(), "Highest bid: 1.5 SOL");
    }

    #[test]
    fn recomputes_only_when_inputs_change() {
        let feed = CountingFeed {
            price: Cell::new(10.0),
            reads: Cell::new(0),
        };
        let mut label = AmountLabel::new(3.0, AmountLabelOptions::default());

        assert!(label.sync(&feed));
        assert!(!label.sync(&feed));
        assert_eq!(feed.reads.get(), 2);

        feed.price.set(12.0);
        assert!(label.sync(&feed));
        assert_eq!(label.price_usd(), Some(36.0));

        label.set_amount(3.0);
        assert!(!label.sync(&feed));

        label.set_amount("4");
        assert!(label.sync(&feed));
        assert_eq!(label.price_usd(), Some(48.0));
    }

    #[test]
    fn unsynced_numeric_label_shows_zero_dollars() {
        let label = AmountLabel::new(5.0, AmountLabelOptions::default());
        assert_eq!(
            label.render(&UsdFormatter).usd,
            Some(UsdLine::Amount("$0.00".to_string()))
        );
    }

    #[test]
    fn parses_amount_text() {
        assert_eq!(Amount::from(" 2.5 ").value(), Some(2.5));
        assert!(!Amount::from("").is_numeric());
        assert!(!Amount::from("NaN").is_numeric());
        assert!(!Amount::from("inf").is_numeric());
        assert!(!Amount::from("12abc").is_numeric());
        assert!(!Amount::from(f64::NAN).is_numeric());
        assert!(!Amount::from(f64::INFINITY).is_numeric());
    }

    #[test]
    fn formats_usd() {
        assert_eq!(UsdFormatter.format(0.0), "$0.00");
        assert_eq!(UsdFormatter.format(20.0), "$20.00");
        assert_eq!(UsdFormatter.format(999.999), "$1,000.00");
        assert_eq!(UsdFormatter.format(1_234_567.891), "$1,234,567.89");
        assert_eq!(UsdFormatter.format(-1_500.5), "-$1,500.50");
        assert_eq!(UsdFormatter.format(-0.001), "$0.00");
    }
}

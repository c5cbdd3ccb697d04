/// Entries of the main menu, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewMarket = 1,
    Buy = 2,
    Sell = 3,
    ViewPortfolio = 4,
    PortfolioValue = 5,
    Exit = 6,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::ViewMarket,
        MenuChoice::Buy,
        MenuChoice::Sell,
        MenuChoice::ViewPortfolio,
        MenuChoice::PortfolioValue,
        MenuChoice::Exit,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.code() == code)
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewMarket => "View market data",
            MenuChoice::Buy => "Buy stock",
            MenuChoice::Sell => "Sell stock",
            MenuChoice::ViewPortfolio => "View portfolio",
            MenuChoice::PortfolioValue => "View portfolio value",
            MenuChoice::Exit => "Exit",
        }
    }
}

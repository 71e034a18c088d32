use crate::planner::domain::Currency;

/// Symbol used when a currency code is missing or unknown.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

const fn currency(
    code: &'static str,
    symbol: &'static str,
    name: &'static str,
    flag: &'static str,
) -> Currency {
    Currency {
        code,
        symbol,
        name,
        flag,
    }
}

static CURRENCIES: &[Currency] = &[
    currency("USD", "$", "US Dollar", "🇺🇸"),
    currency("EUR", "€", "Euro", "🇪🇺"),
    currency("GBP", "£", "British Pound", "🇬🇧"),
    currency("CAD", "C$", "Canadian Dollar", "🇨🇦"),
    currency("AUD", "A$", "Australian Dollar", "🇦🇺"),
    currency("JPY", "¥", "Japanese Yen", "🇯🇵"),
    currency("CHF", "CHF", "Swiss Franc", "🇨🇭"),
    currency("SEK", "kr", "Swedish Krona", "🇸🇪"),
    currency("INR", "₹", "Indian Rupee", "🇮🇳"),
    currency("CNY", "¥", "Chinese Yuan", "🇨🇳"),
    currency("SGD", "S$", "Singapore Dollar", "🇸🇬"),
    currency("HKD", "HK$", "Hong Kong Dollar", "🇭🇰"),
    currency("KRW", "₩", "South Korean Won", "🇰🇷"),
    currency("AED", "د.إ", "UAE Dirham", "🇦🇪"),
    currency("ILS", "₪", "Israeli Shekel", "🇮🇱"),
    currency("ZAR", "R", "South African Rand", "🇿🇦"),
    currency("NGN", "₦", "Nigerian Naira", "🇳🇬"),
    currency("KES", "KSh", "Kenyan Shilling", "🇰🇪"),
    currency("EGP", "E£", "Egyptian Pound", "🇪🇬"),
    currency("MAD", "DH", "Moroccan Dirham", "🇲🇦"),
    currency("GHS", "₵", "Ghanaian Cedi", "🇬🇭"),
    currency("ETB", "Br", "Ethiopian Birr", "🇪🇹"),
    currency("UGX", "USh", "Ugandan Shilling", "🇺🇬"),
    currency("TZS", "TSh", "Tanzanian Shilling", "🇹🇿"),
    currency("RWF", "FRw", "Rwandan Franc", "🇷🇼"),
    currency("TND", "DT", "Tunisian Dinar", "🇹🇳"),
    currency("DZD", "DA", "Algerian Dinar", "🇩🇿"),
    currency("XOF", "CFA", "West African CFA Franc", "🇸🇳"),
    currency("BRL", "R$", "Brazilian Real", "🇧🇷"),
    currency("MXN", "MX$", "Mexican Peso", "🇲🇽"),
    currency("ARS", "AR$", "Argentine Peso", "🇦🇷"),
    currency("CLP", "CL$", "Chilean Peso", "🇨🇱"),
    currency("PEN", "S/", "Peruvian Sol", "🇵🇪"),
    currency("COP", "COL$", "Colombian Peso", "🇨🇴"),
    currency("VES", "Bs", "Venezuelan Bolívar", "🇻🇪"),
    currency("UYU", "$U", "Uruguayan Peso", "🇺🇾"),
    currency("THB", "฿", "Thai Baht", "🇹🇭"),
    currency("MYR", "RM", "Malaysian Ringgit", "🇲🇾"),
    currency("IDR", "Rp", "Indonesian Rupiah", "🇮🇩"),
    currency("PHP", "₱", "Philippine Peso", "🇵🇭"),
];

pub fn currencies() -> &'static [Currency] {
    CURRENCIES
}

/// Case-insensitive lookup by ISO code.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    CURRENCIES
        .iter()
        .find(|currency| currency.code.eq_ignore_ascii_case(code))
}

pub fn currency_symbol(code: &str) -> &'static str {
    find_currency(code)
        .map(|currency| currency.symbol)
        .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
}

use super::domain::{AgeGroup, AllocationCategory};
use super::reference::{city_multiplier, currency_symbol};
use super::selection::AdviceSelection;

const BASE_CURRENCY_SYMBOL: char = '$';

fn base_tips(category: AllocationCategory, age: AgeGroup) -> [&'static str; 2] {
    use AgeGroup::*;
    use AllocationCategory::*;

    match (category, age) {
        (Necessities, EighteenToTwentyFive) => [
            "Get 2-3 roommates in affordable cities - rent drops significantly! 🏠",
            "Skip the daily expensive coffee and make it at home - your wallet will thank you! ☕",
        ],
        (Necessities, TwentySixToThirtyFive) => [
            "Meal prep like a boss instead of ordering takeout every night! 🥗",
            "Consider buying in emerging neighborhoods - appreciation potential! 🏡",
        ],
        (Necessities, ThirtySixToFortyFive) => [
            "Refinance that mortgage if rates dropped - every percent counts! 🏦",
            "Energy-efficient appliances now = lower bills forever! 💡",
        ],
        (Necessities, FortySixToFiftyFive) => [
            "Downsize before retirement - less house, more travel fund! ✈️",
            "Pay off that mortgage early if you can - freedom feels amazing! 🎉",
        ],
        (Necessities, FiftySixPlus) => [
            "Healthcare costs are real - budget accordingly and stay healthy! 🏥",
            "Consider senior discounts everywhere - you've earned them! 🎫",
        ],
        (Savings, EighteenToTwentyFive) => [
            "Start that emergency fund with just $25/month - future you will be grateful! 🙏",
            "Automate savings so you can't spend it on impulse purchases! 🤖",
        ],
        (Savings, TwentySixToThirtyFive) => [
            "Aim for 6 months of expenses saved - job security in uncertain times! 💪",
            "High-yield savings account > regular savings - make your money work! 💰",
        ],
        (Savings, ThirtySixToFortyFive) => [
            "Beef up that emergency fund - kids and mortgages need backup plans! 👨‍👩‍👧‍👦",
            "Consider a money market account for better returns on your safety net! 📊",
        ],
        (Savings, FortySixToFiftyFive) => [
            "Max out those catch-up contributions - retirement is closer than you think! ⏰",
            "Consider a conservative bond ladder for steady returns! 📈",
        ],
        (Savings, FiftySixPlus) => [
            "Keep 1-2 years of expenses liquid - you never know what life throws! 🎯",
            "CDs and treasury bills are your friends for safe, steady growth! 🏛️",
        ],
        (Investments, EighteenToTwentyFive) => [
            "Index funds > individual stocks - diversification is your superpower! 🦸‍♀️",
            "Start with $50/month in a Roth IRA - compound interest is magic! ✨",
        ],
        (Investments, TwentySixToThirtyFive) => [
            "Max that 401k match - it's literally free money from your boss! 💸",
            "Consider target-date funds if picking stocks feels overwhelming! 🎯",
        ],
        (Investments, ThirtySixToFortyFive) => [
            "Rebalance annually - don't let one asset class take over your portfolio! ⚖️",
            "529 plans for kids' education - because college is expensive! 🎓",
        ],
        (Investments, FortySixToFiftyFive) => [
            "Start shifting to more conservative investments - protect what you've built! 🛡️",
            "Consider dividend-paying stocks for steady income streams! 💰",
        ],
        (Investments, FiftySixPlus) => [
            "Focus on income-generating investments - bonds, REITs, dividend stocks! 🏢",
            "Don't abandon stocks entirely - inflation protection is key! 📈",
        ],
        (Entertainment, EighteenToTwentyFive) => [
            "Netflix party > movie theater - same fun, way less money! 🎬",
            "Happy hours and potlucks > expensive dinners out! 🍻",
        ],
        (Entertainment, TwentySixToThirtyFive) => [
            "Date nights at home can be just as romantic (and cheaper)! 💕",
            "Free community events > pricey weekend plans! 🎪",
        ],
        (Entertainment, ThirtySixToFortyFive) => [
            "Family game nights > expensive theme parks every weekend! 🎲",
            "Staycations can be more relaxing than costly vacations! 🏖️",
        ],
        (Entertainment, FortySixToFiftyFive) => [
            "Senior discounts on entertainment - use them proudly! 🎭",
            "Off-season travel = same experience, half the price! ✈️",
        ],
        (Entertainment, FiftySixPlus) => [
            "Community center activities > expensive club memberships! 🏊‍♂️",
            "Matinee movies and early bird dinners - why pay full price? 🍽️",
        ],
        (Personal, EighteenToTwentyFive) => [
            "YouTube University > expensive courses sometimes! 📺",
            "Library books > buying every book you might read! 📖",
        ],
        (Personal, TwentySixToThirtyFive) => [
            "Professional development courses > that designer handbag! 💼",
            "Gym membership > personal trainer sessions to start! 💪",
        ],
        (Personal, ThirtySixToFortyFive) => [
            "Online certifications > MBA (unless your employer pays)! 💻",
            "Meditation app > expensive therapy (though therapy is great too)! 🧘‍♀️",
        ],
        (Personal, FortySixToFiftyFive) => [
            "Health and wellness investments pay the best dividends! 🍎",
            "Learning new skills keeps your mind sharp and wallet happy! 🧠",
        ],
        (Personal, FiftySixPlus) => [
            "Invest in experiences and health - money can't buy time! ⏳",
            "Hobbies that generate income are the best hobbies! 🎨",
        ],
    }
}

fn city_tips(category: AllocationCategory, multiplier: f64, symbol: &str) -> Vec<String> {
    match category {
        AllocationCategory::Necessities if multiplier > 1.3 => vec![
            format!("Living in an expensive city? Consider house-sharing to cut rent by 50%+ - from {symbol}3000 to {symbol}1500! 🏠"),
            format!("Skip the daily {symbol}8 coffee in expensive areas - make it at home and save {symbol}200/month! ☕"),
            format!("Use public transit instead of owning a car - save {symbol}800+/month on payments, insurance, and parking! 🚇"),
        ],
        AllocationCategory::Savings if multiplier > 1.3 => vec![
            "High cost of living means higher savings targets - aim for 8-12 months of expenses! 💪".to_string(),
            "Consider moving to suburbs for better value - same job, lower costs! 🚊".to_string(),
        ],
        AllocationCategory::Necessities if multiplier < 0.8 => vec![
            "Living in an affordable area? Take advantage - buy instead of rent if possible! 🏡".to_string(),
            "Lower cost of living means more money for other goals - maximize this advantage! 💰".to_string(),
        ],
        AllocationCategory::Investments if multiplier < 0.8 => vec![
            "Affordable living = more investment potential - consider increasing your investment percentage! 📈".to_string(),
            "Lower expenses mean you can take slightly more investment risk for higher returns! 🚀".to_string(),
        ],
        _ => Vec::new(),
    }
}

/// Swaps the dollar sign in front of an amount for the given symbol.
fn localize_amounts(tip: &str, symbol: &str) -> String {
    let mut localized = String::with_capacity(tip.len());
    let mut chars = tip.chars().peekable();
    while let Some(c) = chars.next() {
        if c == BASE_CURRENCY_SYMBOL && chars.peek().is_some_and(|next| next.is_ascii_digit()) {
            localized.push_str(symbol);
        } else {
            localized.push(c);
        }
    }
    localized
}

/// One spending tip for a budget category.
///
/// City-specific tips take precedence when the city is very expensive or very
/// affordable. Otherwise the tip comes from the age table (the 26-35 row when
/// no bracket is known). Dollar amounts use the currency's symbol.
pub fn category_tip(
    category: AllocationCategory,
    age: Option<AgeGroup>,
    city_key: Option<&str>,
    currency_code: Option<&str>,
    selection: AdviceSelection,
) -> String {
    let symbol = currency_symbol(currency_code.unwrap_or_default());

    if city_key.is_some() {
        let local = city_tips(category, city_multiplier(city_key), symbol);
        if let Some(tip) = selection.pick(&local) {
            return tip.clone();
        }
    }

    let age = age.unwrap_or(AgeGroup::TwentySixToThirtyFive);
    let candidates = base_tips(category, age);
    let tip = selection.pick(&candidates).copied().unwrap_or(candidates[0]);
    localize_amounts(tip, symbol)
}

use budget_allocator::config::AppConfig;
use budget_allocator::error::AppError;
use budget_allocator::planner::reference::city_groups;
use budget_allocator::planner::{AdviceSelection, BudgetPlan, BudgetPlanner, BudgetRequest};
use clap::Args;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PlanArgs {
    /// Monthly take-home income
    #[arg(long)]
    pub(crate) income: String,
    /// Age bracket: 18-25, 26-35, 36-45, 46-55 or 56+
    #[arg(long)]
    pub(crate) age_group: String,
    /// student, single, couple, family or retiree
    #[arg(long)]
    pub(crate) living_situation: String,
    /// City key as listed by the `cities` command
    #[arg(long, default_value = "other")]
    pub(crate) city: String,
    /// ISO currency code
    #[arg(long, default_value = "USD")]
    pub(crate) currency: String,
    /// Seed for tip selection; repeated runs with the same seed print the same tips
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Also write the allocation lines to a CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CitiesArgs {
    /// Only show groups whose label contains this text
    #[arg(long)]
    pub(crate) region: Option<String>,
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let planner = BudgetPlanner::new(config.planner);

    let request = BudgetRequest {
        monthly_income: args.income,
        currency: args.currency,
        age_group: args.age_group,
        living_situation: args.living_situation,
        city: args.city,
    };
    let validated = request.validate()?;
    let selection = match args.seed {
        Some(seed) => AdviceSelection::Seeded(seed),
        None => planner.config().advice_mode.selection(),
    };
    let plan = planner.plan_validated(&validated, selection);

    let stdout = std::io::stdout();
    render_plan(&plan, &mut stdout.lock())?;

    if let Some(path) = args.csv {
        let file = File::create(&path)?;
        write_plan_csv(&plan, file).map_err(std::io::Error::from)?;
        println!("\nAllocation CSV written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_cities(args: CitiesArgs) {
    let filter = args.region.map(|region| region.to_ascii_lowercase());

    for group in city_groups() {
        if let Some(filter) = &filter {
            if !group.label.to_ascii_lowercase().contains(filter) {
                continue;
            }
        }

        println!("{}", group.label);
        for city in group.cities {
            println!(
                "- {} {} [{}] x{:.2}",
                city.flag, city.name, city.value, city.multiplier
            );
        }
        println!();
    }
}

pub(crate) fn render_plan<W: Write>(plan: &BudgetPlan, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Budget plan")?;
    let location = plan.city.as_ref().map_or("Unlisted location", |city| city.name);
    writeln!(
        out,
        "Income {}{:.2}/month | {} | {} | {}",
        plan.currency.symbol, plan.monthly_income, plan.age_group, plan.living_situation, location
    )?;

    writeln!(out, "\nAllocation")?;
    for line in &plan.allocations {
        writeln!(
            out,
            "- {} {}: {}% ({})",
            line.emoji, line.name, line.percentage, line.monthly_display
        )?;
        writeln!(out, "    tip: {}", line.tip)?;
    }

    if plan.careers.is_empty() {
        writeln!(out, "\nCareer paths: none pay meaningfully more than today")?;
    } else {
        writeln!(out, "\nCareer paths")?;
        for career in &plan.careers {
            let suggestion = &career.suggestion;
            writeln!(
                out,
                "- {} {}: {} (+{}% | +{}/month), growth {}, {} to transition",
                suggestion.emoji,
                suggestion.field,
                suggestion.salary_display,
                career.percent_increase,
                career.monthly_increase_display,
                suggestion.growth_rate,
                suggestion.time_to_transition
            )?;
        }
    }

    writeln!(out, "\nAdvice: {}", plan.career_advice)?;

    if !plan.courses.is_empty() {
        writeln!(out, "\nRecommended courses")?;
        for course in &plan.courses {
            let price = if course.is_free() {
                "free".to_string()
            } else {
                format!("{}{:.2}", plan.currency.symbol, course.price)
            };
            writeln!(
                out,
                "- {} {} ({}, {}, rated {:.1})",
                course.emoji, course.title, course.provider, price, course.rating
            )?;
        }
    }

    Ok(())
}

pub(crate) fn write_plan_csv<W: Write>(plan: &BudgetPlan, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["category", "name", "percentage", "monthly_amount", "tip"])?;
    for line in &plan.allocations {
        let category = serde_json::to_value(line.category)
            .ok()
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default();
        csv_writer.write_record([
            category,
            line.name.clone(),
            line.percentage.to_string(),
            format!("{:.2}", line.monthly_amount),
            line.tip.clone(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

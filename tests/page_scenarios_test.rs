//! End-to-end page scenarios: a host page is loaded, the user types into
//! fields and presses the two buttons.

use autoops_roi::config::{parse_config, EstimatorConfig};
use autoops_roi::{Estimator, EstimatorHost, InputField, MemoryHost, OutputField, TextKind, Trigger};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn load_page(estimator: &Estimator) -> MemoryHost {
    MemoryHost::new(estimator.defaults(), estimator.display())
}

fn outputs(host: &MemoryHost) -> Vec<&str> {
    OutputField::ALL
        .iter()
        .filter(|field| **field != OutputField::Summary)
        .map(|field| host.output(*field).unwrap_or_default())
        .collect()
}

#[test]
fn test_default_page_calculation() {
    let estimator = Estimator::default();
    let mut host = load_page(&estimator);

    let result = estimator.dispatch(Trigger::Calculate, &mut host);

    assert!((result.recovered_deals - 1.989).abs() < 1e-9);
    assert!((result.recovered_money - 69_615.0).abs() < 1e-6);
    assert!((result.risk_adjusted_value - 80_057.25).abs() < 1e-6);
    assert_eq!(result.time_saved_hours, 70.0);
    assert_eq!(
        outputs(&host),
        ["R69,615", "2.0", "70 hrs", "R80,057", "10.7×"]
    );
    assert_eq!(
        host.output(OutputField::Summary),
        Some(
            "Based on your inputs, AutoOps could conservatively recover about \
             <strong>2.0 extra deals/month</strong> — roughly \
             <strong>R69,615 in gross profit</strong> — while saving your team around \
             <strong>70 hours/month</strong>. That's a directional ROI of \
             <strong>10.7×</strong> vs R6,500/month."
        )
    );
    assert!(host.is_results_visible());
}

#[test]
fn test_fast_response_small_store() {
    let estimator = Estimator::default();
    let mut host = load_page(&estimator);
    host.set_input(InputField::Leads, "100");
    host.set_input(InputField::Cars, "10");
    host.set_input(InputField::Gross, "20000");
    host.set_input(InputField::Salespeople, "2");
    host.set_input(InputField::AfterHours, "0");
    host.set_input(InputField::ResponseTime, "3");

    let result = estimator.dispatch(Trigger::Calculate, &mut host);

    // 10 * 0.01 = 0.1 is lifted to the floor of 0.3
    assert_eq!(result.recovered_deals, 0.3);
    assert_eq!(result.time_saved_hours, 12.0);
    assert_eq!(
        outputs(&host),
        ["R6,000", "0.3", "12 hrs", "R6,900", "0.9×"]
    );
}

#[test]
fn test_large_store_is_capped() {
    let estimator = Estimator::default();
    let mut host = load_page(&estimator);
    host.set_input(InputField::Leads, "20000");
    host.set_input(InputField::Cars, "500");
    host.set_input(InputField::Gross, "1000");
    host.set_input(InputField::AfterHours, "1");
    host.set_input(InputField::ResponseTime, "600");

    let result = estimator.dispatch(Trigger::Calculate, &mut host);

    // 500 * 0.08 * 1.35 = 54, capped at 500 * 0.12 = 60: not clamped
    assert!((result.recovered_deals - 54.0).abs() < 1e-9);
    assert_eq!(host.output(OutputField::Time), Some("70 hrs"));
}

#[test]
fn test_garbage_inputs_give_floor_result() {
    let estimator = Estimator::default();
    let mut host = load_page(&estimator);
    for field in InputField::ALL {
        host.set_input(field, "n/a");
    }

    let result = estimator.dispatch(Trigger::Calculate, &mut host);

    assert_eq!(result.recovered_deals, 0.3);
    assert_eq!(result.recovered_money, 0.0);
    assert_eq!(result.time_saved_hours, 0.0);
    assert_eq!(outputs(&host), ["R0", "0.3", "0 hrs", "R0", "0.0×"]);
}

#[test]
fn test_calculate_then_reset_then_calculate() {
    let estimator = Estimator::default();
    let mut host = load_page(&estimator);
    host.set_input(InputField::Gross, "50000");
    let first = estimator.dispatch(Trigger::Calculate, &mut host);

    estimator.dispatch(Trigger::Reset, &mut host);
    assert_eq!(host.input(InputField::Gross), Some("35000"));
    assert_eq!(outputs(&host), ["R0", "0.0", "0 hrs", "R0", "0.0×"]);
    assert_eq!(
        host.output(OutputField::Summary),
        Some("Enter your numbers and click \"Calculate opportunity\".")
    );
    assert_eq!(host.output_kind(OutputField::Summary), Some(TextKind::Plain));
    assert!(host.is_results_visible());

    let second = estimator.dispatch(Trigger::Calculate, &mut host);
    assert!(second.recovered_money < first.recovered_money);
    assert_eq!(host.output(OutputField::Money), Some("R69,615"));
}

#[test]
fn test_configured_page() {
    let config: EstimatorConfig = parse_config(indoc! {r#"
        [defaults]
        leads = 800.0
        cars = 20.0
        gross = 10000.0
        salespeople = 3.0
        after_hours_share = 0.5
        response_minutes = 10.0

        [display]
        currency_symbol = "$"
        product_name = "LeadBot"

        [model]
        reference_monthly_cost = 1000.0
    "#})
    .unwrap();
    let estimator = Estimator::from_config(&config);
    let mut host = load_page(&estimator);
    assert_eq!(host.read_input(InputField::AfterHours).as_deref(), Some("0.50"));

    estimator.dispatch(Trigger::Calculate, &mut host);

    // 20 * 0.02 * 1.175 = 0.47 deals
    assert_eq!(host.output(OutputField::Deals), Some("0.5"));
    assert_eq!(host.output(OutputField::Money), Some("$4,700"));
    assert_eq!(host.output(OutputField::Roi), Some("4.7×"));
    assert_eq!(host.output(OutputField::Time), Some("29 hrs"));
    let summary = host.output(OutputField::Summary).unwrap_or_default();
    assert!(summary.starts_with("Based on your inputs, LeadBot could"));
    assert!(summary.ends_with("vs $1,000/month."));
}

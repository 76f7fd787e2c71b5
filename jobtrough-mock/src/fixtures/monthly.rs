use jobtrough_core::RawMonthlyRow;

pub const FIRST_YEAR: i32 = 2000;
pub const LAST_YEAR: i32 = 2023;

struct Industry {
    name: &'static str,
    code: &'static str,
    series_id: &'static str,
    /// Level in January 2000, thousands.
    base: f64,
    /// Trend growth per year.
    growth: f64,
    /// Peak-to-trough loss for the 2001, 2008 and 2020 downturns.
    depths: [f64; 3],
}

#[rustfmt::skip]
const INDUSTRIES: &[Industry] = &[
    Industry { name: "Total nonfarm", code: "00", series_id: "CES0000000001", base: 130_800.0, growth: 0.009, depths: [0.020, 0.063, 0.145] },
    Industry { name: "Mining and logging", code: "10", series_id: "CES1000000001", base: 600.0, growth: 0.012, depths: [0.040, 0.130, 0.140] },
    Industry { name: "Construction", code: "20", series_id: "CES2000000001", base: 6_700.0, growth: 0.012, depths: [0.030, 0.280, 0.140] },
    Industry { name: "Durable goods manufacturing", code: "31", series_id: "CES3100000001", base: 11_100.0, growth: -0.012, depths: [0.120, 0.170, 0.060] },
    Industry { name: "Nondurable goods manufacturing", code: "32", series_id: "CES3200000001", base: 6_900.0, growth: -0.015, depths: [0.060, 0.080, 0.060] },
    Industry { name: "Wholesale trade", code: "41", series_id: "CES4142000001", base: 5_900.0, growth: 0.004, depths: [0.020, 0.070, 0.050] },
    Industry { name: "Retail trade", code: "42", series_id: "CES4200000001", base: 15_200.0, growth: 0.003, depths: [0.010, 0.070, 0.150] },
    Industry { name: "Transportation and warehousing", code: "43", series_id: "CES4300000001", base: 4_400.0, growth: 0.014, depths: [0.030, 0.070, 0.090] },
    Industry { name: "Utilities", code: "44", series_id: "CES4422000001", base: 600.0, growth: -0.003, depths: [0.010, 0.010, 0.010] },
    Industry { name: "Information", code: "50", series_id: "CES5000000001", base: 3_600.0, growth: -0.004, depths: [0.120, 0.090, 0.090] },
    Industry { name: "Financial activities", code: "55", series_id: "CES5500000001", base: 7_700.0, growth: 0.008, depths: [0.005, 0.060, 0.020] },
    Industry { name: "Professional and business services", code: "60", series_id: "CES6000000001", base: 16_700.0, growth: 0.016, depths: [0.040, 0.080, 0.110] },
    Industry { name: "Education and health services", code: "65", series_id: "CES6500000001", base: 15_100.0, growth: 0.022, depths: [0.000, 0.000, 0.110] },
    Industry { name: "Leisure and hospitality", code: "70", series_id: "CES7000000001", base: 11_800.0, growth: 0.015, depths: [0.005, 0.030, 0.490] },
    Industry { name: "Other services", code: "80", series_id: "CES8000000001", base: 5_100.0, growth: 0.005, depths: [0.000, 0.030, 0.230] },
    Industry { name: "Government", code: "90", series_id: "CES9000000001", base: 20_800.0, growth: 0.006, depths: [0.000, 0.020, 0.060] },
];

/// (peak, trough, recovered) as months since January 2000.
const DOWNTURNS: [(i32, i32, i32); 3] = [
    (14, 41, 60),    // 2001-03, 2003-06, 2005-01
    (96, 121, 171),  // 2008-01, 2010-02, 2014-04
    (241, 243, 269), // 2020-02, 2020-04, 2022-06
];

fn dip(t: i32, (peak, trough, recovered): (i32, i32, i32)) -> f64 {
    if t <= peak || t >= recovered {
        0.0
    } else if t <= trough {
        f64::from(t - peak) / f64::from(trough - peak)
    } else {
        f64::from(recovered - t) / f64::from(recovered - trough)
    }
}

fn level(ind: &Industry, t: i32) -> f64 {
    let trend = ind.base * (1.0 + ind.growth).powf(f64::from(t) / 12.0);
    let loss: f64 = DOWNTURNS
        .iter()
        .zip(ind.depths)
        .map(|(d, depth)| depth * dip(t, *d))
        .sum();
    trend * (1.0 - loss)
}

fn row(ind: &Industry, year: i32, month: i32, value: f64, seasonal: &str) -> RawMonthlyRow {
    RawMonthlyRow {
        series_id: Some(format!("{:<16}", ind.series_id)),
        supersector_code: Some(ind.code.to_string()),
        industry: Some(ind.name.to_string()),
        year: year.to_string(),
        period: Some(format!("M{month:02}")),
        month: None,
        value: format!("{value:.1}"),
        data_type_code: Some("01".to_string()),
        seasonal: Some(seasonal.to_string()),
    }
}

/// Seasonally adjusted rows for every industry from 2000 through 2023, plus
/// unadjusted total nonfarm rows that the default row filter discards.
pub fn all_rows() -> Vec<RawMonthlyRow> {
    let months = (LAST_YEAR - FIRST_YEAR + 1) * 12;
    let mut out = Vec::new();
    for ind in INDUSTRIES {
        for t in 0..months {
            let (year, month) = (FIRST_YEAR + t / 12, t % 12 + 1);
            out.push(row(ind, year, month, level(ind, t), "S"));
        }
    }
    let total = &INDUSTRIES[0];
    for t in 0..months {
        let (year, month) = (FIRST_YEAR + t / 12, t % 12 + 1);
        let season = if (6..=8).contains(&month) { 1.01 } else { 0.995 };
        out.push(row(total, year, month, level(total, t) * season, "U"));
    }
    out
}

/// Industry names carried by the fixture, in table order.
pub fn industries() -> Vec<&'static str> {
    INDUSTRIES.iter().map(|i| i.name).collect()
}

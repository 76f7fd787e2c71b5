use jobtrough_core::RawAnnualRow;

// Annual average total nonfarm employment, thousands.
const TOTALS: &[(i32, u32)] = &[
    (2000, 132_024),
    (2001, 132_087),
    (2002, 130_649),
    (2003, 130_347),
    (2004, 131_787),
    (2005, 134_034),
    (2006, 136_453),
    (2007, 137_999),
    (2008, 137_242),
    (2009, 131_313),
    (2010, 130_361),
    (2011, 131_932),
    (2012, 134_175),
    (2013, 136_381),
    (2014, 138_958),
    (2015, 141_843),
    (2016, 144_352),
    (2017, 146_624),
    (2018, 148_908),
    (2019, 150_904),
    (2020, 142_186),
    (2021, 146_285),
    (2022, 152_520),
    (2023, 156_051),
];

pub fn totals() -> Vec<RawAnnualRow> {
    TOTALS
        .iter()
        .map(|(year, value)| RawAnnualRow {
            year: year.to_string(),
            value: value.to_string(),
            yoy_change: String::new(),
        })
        .collect()
}

//! lease-ffi
//!
//! C ABI over lease-core for native mobile front ends. Every entry point is
//! a pure computation: the caller owns all state and passes it in full.

use std::{
    ffi::{CStr, CString},
    os::raw::{c_char, c_double, c_int},
    ptr,
    sync::OnceLock,
};

use chrono::{NaiveDate, NaiveDateTime};
use lease_core::{parse_amount, LeaseAccounting, MileageStanding, OfferComparator};
use lease_domain::{FinancingOffer, LeaseTerm, MileageAllowance, MileageState};

/// Semantic version of the FFI surface. Bumps when ABI/contract changes.
pub const FFI_VERSION: &str = "0.1.0";

pub const LEASE_FFI_OK: c_int = 0;
pub const LEASE_FFI_NULL_POINTER: c_int = 1;
pub const LEASE_FFI_INVALID_DATE: c_int = 2;
pub const LEASE_FFI_INVALID_TERM: c_int = 3;
pub const LEASE_FFI_INVALID_ALLOWANCE: c_int = 4;
pub const LEASE_FFI_INVALID_MILEAGE: c_int = 5;

pub const LEASE_FFI_STANDING_UNDER: c_int = 0;
pub const LEASE_FFI_STANDING_OVER: c_int = 1;
pub const LEASE_FFI_STANDING_ON_TRACK: c_int = 2;

/// Calendar date plus local wall-clock time.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FfiTimestamp {
    pub year: c_int,
    pub month: c_int,
    pub day: c_int,
    pub hour: c_int,
    pub minute: c_int,
    pub second: c_int,
}

/// Lease snapshot exposed over FFI. Mileage fields are zero when `has_metrics` is 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FfiLeaseReport {
    pub days_left: i64,
    pub has_metrics: c_int,
    pub days_elapsed: i64,
    pub current_mileage: c_double,
    pub recommended_mileage: c_double,
    pub excess_mileage: c_double,
    pub amount_owed: c_double,
    pub average_daily_mileage: c_double,
    pub show_amount_owed: c_int,
    pub standing: c_int,
    pub standing_miles: c_double,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FfiOfferComparison {
    pub first_total: c_double,
    pub second_total: c_double,
    /// 1 or 2; equal totals report 1.
    pub cheaper: c_int,
    pub difference: c_double,
}

/// Returns the FFI interface semantic version as a C string.
#[no_mangle]
pub extern "C" fn lease_ffi_version() -> *const c_char {
    static VERSION: OnceLock<CString> = OnceLock::new();
    VERSION
        .get_or_init(|| CString::new(FFI_VERSION).unwrap_or_default())
        .as_ptr()
}

#[no_mangle]
pub extern "C" fn lease_ffi_report(
    lease_start: FfiTimestamp,
    lease_end: FfiTimestamp,
    now: FfiTimestamp,
    current_mileage: c_double,
    annual_allowance: c_double,
    out_report: *mut FfiLeaseReport,
    out_error: *mut *mut c_char,
) -> c_int {
    clear_error(out_error);
    if out_report.is_null() {
        unsafe {
            write_error(out_error, "output report is null");
        }
        return LEASE_FFI_NULL_POINTER;
    }

    let (Some(start), Some(end), Some(now)) = (
        to_date(lease_start),
        to_date(lease_end),
        to_timestamp(now),
    ) else {
        unsafe {
            write_error(out_error, "invalid calendar date");
        }
        return LEASE_FFI_INVALID_DATE;
    };

    let term = match LeaseTerm::new(start, end) {
        Ok(term) => term,
        Err(err) => {
            unsafe {
                write_error(out_error, &err.to_string());
            }
            return LEASE_FFI_INVALID_TERM;
        }
    };

    let Some(allowance) = MileageAllowance::from_annual_miles(annual_allowance) else {
        unsafe {
            write_error(
                out_error,
                &format!("unsupported annual allowance {annual_allowance}"),
            );
        }
        return LEASE_FFI_INVALID_ALLOWANCE;
    };

    if !current_mileage.is_finite() || current_mileage < 0.0 {
        unsafe {
            write_error(
                out_error,
                &format!("mileage must be a non-negative number, got {current_mileage}"),
            );
        }
        return LEASE_FFI_INVALID_MILEAGE;
    }

    let state = MileageState::new(current_mileage, allowance);
    let report = LeaseAccounting::report(&term, &state, now);
    let mut out = FfiLeaseReport {
        days_left: report.days_left,
        ..FfiLeaseReport::default()
    };
    if let Some(metrics) = report.metrics {
        let (standing, standing_miles) = standing_to_code(metrics.standing);
        out.has_metrics = 1;
        out.days_elapsed = metrics.days_elapsed;
        out.current_mileage = metrics.current_mileage;
        out.recommended_mileage = metrics.recommended_mileage;
        out.excess_mileage = metrics.excess_mileage;
        out.amount_owed = metrics.amount_owed;
        out.average_daily_mileage = metrics.average_daily_mileage;
        out.show_amount_owed = c_int::from(metrics.shows_amount_owed());
        out.standing = standing;
        out.standing_miles = standing_miles;
    }

    unsafe {
        *out_report = out;
    }
    LEASE_FFI_OK
}

/// Total paid over the fixed 36-month term.
#[no_mangle]
pub extern "C" fn lease_ffi_total_cost(down_payment: c_double, monthly_payment: c_double) -> c_double {
    OfferComparator::total_cost(&FinancingOffer::new(down_payment, monthly_payment))
}

#[no_mangle]
pub extern "C" fn lease_ffi_compare_offers(
    first_down: c_double,
    first_monthly: c_double,
    second_down: c_double,
    second_monthly: c_double,
    out_comparison: *mut FfiOfferComparison,
) -> c_int {
    if out_comparison.is_null() {
        return LEASE_FFI_NULL_POINTER;
    }
    let first = FinancingOffer::new(first_down, first_monthly);
    let second = FinancingOffer::new(second_down, second_monthly);
    let comparison = OfferComparator::compare(&first, &second);
    unsafe {
        *out_comparison = FfiOfferComparison {
            first_total: OfferComparator::total_cost(&first),
            second_total: OfferComparator::total_cost(&second),
            cheaper: c_int::from(comparison.cheaper.number()),
            difference: comparison.difference,
        };
    }
    LEASE_FFI_OK
}

/// Parses a typed amount. Returns 1 and writes `out_value` when the text is usable, 0 otherwise.
#[no_mangle]
pub extern "C" fn lease_ffi_parse_amount(text: *const c_char, out_value: *mut c_double) -> c_int {
    if text.is_null() || out_value.is_null() {
        return 0;
    }
    let Ok(raw) = unsafe { CStr::from_ptr(text) }.to_str() else {
        return 0;
    };
    match parse_amount(raw) {
        Some(value) => {
            unsafe {
                *out_value = value;
            }
            1
        }
        None => {
            tracing::debug!(input = raw, "amount rejected over ffi");
            0
        }
    }
}

/// Releases an error string previously written by this library.
#[no_mangle]
pub extern "C" fn lease_ffi_string_free(value: *mut c_char) {
    if value.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(value));
    }
}

fn to_date(stamp: FfiTimestamp) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        stamp.year,
        u32::try_from(stamp.month).ok()?,
        u32::try_from(stamp.day).ok()?,
    )
}

fn to_timestamp(stamp: FfiTimestamp) -> Option<NaiveDateTime> {
    to_date(stamp)?.and_hms_opt(
        u32::try_from(stamp.hour).ok()?,
        u32::try_from(stamp.minute).ok()?,
        u32::try_from(stamp.second).ok()?,
    )
}

fn standing_to_code(standing: MileageStanding) -> (c_int, c_double) {
    match standing {
        MileageStanding::Under(miles) => (LEASE_FFI_STANDING_UNDER, miles),
        MileageStanding::Over(miles) => (LEASE_FFI_STANDING_OVER, miles),
        MileageStanding::OnTrack => (LEASE_FFI_STANDING_ON_TRACK, 0.0),
    }
}

fn clear_error(out_error: *mut *mut c_char) {
    if out_error.is_null() {
        return;
    }
    unsafe {
        *out_error = ptr::null_mut();
    }
}

unsafe fn write_error(out_error: *mut *mut c_char, message: &str) {
    if out_error.is_null() {
        return;
    }
    if let Ok(cstring) = CString::new(message) {
        *out_error = cstring.into_raw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lease_domain::OfferSlot;

    #[test]
    fn exposes_version() {
        let version = unsafe { CStr::from_ptr(lease_ffi_version()) };
        assert_eq!(version.to_str().unwrap(), FFI_VERSION);
    }

    #[test]
    fn tie_reports_first_slot() {
        let mut out = FfiOfferComparison::default();
        assert_eq!(lease_ffi_compare_offers(0.0, 100.0, 0.0, 100.0, &mut out), LEASE_FFI_OK);
        assert_eq!(out.cheaper, c_int::from(OfferSlot::First.number()));
        assert_eq!(out.difference, 0.0);
    }
}

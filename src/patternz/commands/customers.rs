use crate::commands::CmdResult;
use crate::customers::CustomerBrowser;
use crate::error::Result;
use crate::output::Output;
use crate::store::CustomerStore;

/// Customer added by the scripted browse.
pub const NEW_CUSTOMER: &str = "Henry Velasquez";

/// Runs the scripted browse: show, next, show, next, show, last, add, last,
/// show all.
pub fn run<B: CustomerBrowser>(browser: &mut B) -> Result<CmdResult> {
    let mut out = Output::new();

    browser.show(&mut out)?;
    browser.next();
    browser.show(&mut out)?;
    browser.next();
    browser.show(&mut out)?;
    browser.last(&mut out)?;
    browser.add(NEW_CUSTOMER);
    browser.last(&mut out)?;
    browser.show_all(&mut out);

    let records = browser.base().data().records().to_vec();
    Ok(CmdResult::default()
        .with_output(out)
        .with_customers(records))
}

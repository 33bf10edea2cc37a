//! # Customer Browser
//!
//! The abstraction side of the customer Bridge. A browser holds a group label
//! and a [`CustomerStore`]; every navigation or mutation is forwarded to the
//! store, and the browser only adds framing around what the store writes.
//!
//! [`CustomerBrowser`] carries the operations as provided methods. Concrete
//! browsers expose their [`CustomersBase`] and override only what they want to
//! decorate:
//!
//! - [`CustomersBase`]: plain forwarding, `show_all` prefixed by the group label.
//! - [`Customers`]: wraps the base `show_all` in separator lines.

use crate::error::Result;
use crate::output::Output;
use crate::store::CustomerStore;

const SEPARATOR_WIDTH: usize = 24;

pub trait CustomerBrowser {
    type Store: CustomerStore;

    fn base(&self) -> &CustomersBase<Self::Store>;

    fn base_mut(&mut self) -> &mut CustomersBase<Self::Store>;

    fn next(&mut self) {
        self.base_mut().data_mut().next_record();
    }

    fn prior(&mut self) {
        self.base_mut().data_mut().prior_record();
    }

    fn add(&mut self, customer: &str) {
        self.base_mut().data_mut().add_record(customer);
    }

    fn delete(&mut self, customer: &str) {
        self.base_mut().data_mut().delete_record(customer);
    }

    fn show(&self, out: &mut Output) -> Result<()> {
        self.base().data().show_record(out)
    }

    fn show_all(&self, out: &mut Output) {
        let base = self.base();
        out.heading(format!("Customer Group: {}", base.group()));
        base.data().show_all_records(out);
    }

    fn last(&self, out: &mut Output) -> Result<()> {
        self.base().data().last_record(out)
    }
}

/// Forwards every operation to its store.
#[derive(Debug, Clone)]
pub struct CustomersBase<S: CustomerStore> {
    group: String,
    data: S,
}

impl<S: CustomerStore> CustomersBase<S> {
    pub fn new(group: impl Into<String>, data: S) -> Self {
        Self {
            group: group.into(),
            data,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn data(&self) -> &S {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut S {
        &mut self.data
    }

    /// Replace the backing store, returning the previous one.
    pub fn set_data(&mut self, data: S) -> S {
        std::mem::replace(&mut self.data, data)
    }
}

impl<S: CustomerStore> CustomerBrowser for CustomersBase<S> {
    type Store = S;

    fn base(&self) -> &CustomersBase<S> {
        self
    }

    fn base_mut(&mut self) -> &mut CustomersBase<S> {
        self
    }
}

/// Browser whose show-all block is framed by separator lines.
#[derive(Debug, Clone)]
pub struct Customers<S: CustomerStore> {
    base: CustomersBase<S>,
}

impl<S: CustomerStore> Customers<S> {
    pub fn new(group: impl Into<String>, data: S) -> Self {
        Self {
            base: CustomersBase::new(group, data),
        }
    }

    pub fn data(&self) -> &S {
        self.base.data()
    }

    pub fn set_data(&mut self, data: S) -> S {
        self.base.set_data(data)
    }
}

impl<S: CustomerStore> CustomerBrowser for Customers<S> {
    type Store = S;

    fn base(&self) -> &CustomersBase<S> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CustomersBase<S> {
        &mut self.base
    }

    fn show_all(&self, out: &mut Output) {
        out.blank();
        out.rule(SEPARATOR_WIDTH);
        self.base.show_all(out);
        out.rule(SEPARATOR_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternzError;
    use crate::output::LineStyle;
    use crate::store::memory::CustomersData;

    fn last_shown<B: CustomerBrowser>(browser: &B) -> String {
        let mut out = Output::new();
        browser.show(&mut out).unwrap();
        out.last_text().unwrap().to_string()
    }

    #[test]
    fn browse_scenario() {
        let mut customers = Customers::new("Chicago", CustomersData::new());
        assert_eq!(last_shown(&customers), "Jim Jones");

        customers.next();
        assert_eq!(last_shown(&customers), "Samual Jackson");

        customers.next();
        assert_eq!(last_shown(&customers), "Allen Good");

        let mut out = Output::new();
        customers.last(&mut out).unwrap();
        assert_eq!(out.last_text(), Some("Lisa Giolani"));

        customers.add("Henry Velasquez");
        assert_eq!(customers.data().len(), 6);

        customers.last(&mut out).unwrap();
        assert_eq!(out.last_text(), Some("Henry Velasquez"));
    }

    #[test]
    fn prior_and_delete_forward_to_store() {
        let mut customers = CustomersBase::new("G", CustomersData::new());
        customers.next();
        customers.prior();
        customers.prior();
        assert_eq!(customers.data().position(), 0);

        customers.delete("Jim Jones");
        assert_eq!(last_shown(&customers), "Samual Jackson");
    }

    #[test]
    fn base_show_all_has_group_header() {
        let customers = CustomersBase::new("Chicago", CustomersData::with_records(["A", "B"]));
        let mut out = Output::new();
        customers.show_all(&mut out);
        assert_eq!(out.texts(), vec!["Customer Group: Chicago", " A", " B"]);
        assert_eq!(out.lines()[0].style, LineStyle::Heading);
    }

    #[test]
    fn refined_show_all_adds_separators() {
        let customers = Customers::new("Chicago", CustomersData::with_records(["A"]));
        let mut out = Output::new();
        customers.show_all(&mut out);
        assert_eq!(
            out.texts(),
            vec![
                "",
                "------------------------",
                "Customer Group: Chicago",
                " A",
                "------------------------",
            ]
        );
    }

    #[test]
    fn set_data_swaps_store() {
        let mut customers = Customers::new("G", CustomersData::new());
        let old = customers.set_data(CustomersData::with_records(["Zed"]));
        assert_eq!(old.len(), 5);
        assert_eq!(last_shown(&customers), "Zed");
    }

    #[test]
    fn show_on_empty_store_errors() {
        let customers = Customers::new("G", CustomersData::empty());
        let mut out = Output::new();
        assert!(matches!(
            customers.show(&mut out),
            Err(PatternzError::NoCurrentRecord)
        ));
    }
}

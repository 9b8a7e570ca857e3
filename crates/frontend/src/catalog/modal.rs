//! Modal selection and the bridge from dialog submits to the controller.

use std::cell::Cell;
use std::rc::Rc;

use contracts::domain::brand::{Brand, BrandId};
use contracts::domain::common::AggregateId;
use contracts::domain::product::{Product, ProductDraft, ProductId};
use contracts::shared::validation::ValidationError;
use thiserror::Error;

use super::controller::CatalogController;
use crate::api::{CatalogTransport, TransportError};

/// Which dialog, if any, is open. At most one by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSelection {
    #[default]
    Closed,
    CreatingNew,
    Viewing(ProductId),
}

impl ModalSelection {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalSelection::Closed)
    }
}

/// Raw form values as typed into the create/detail dialogs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    /// Selected brand id as the `<select>` value; empty when nothing chosen.
    pub brand_id: String,
    pub quantity: String,
    pub price: String,
}

impl ProductForm {
    /// Prefill the detail dialog. The list endpoint only carries the brand
    /// name, so the id is looked up among the known brands.
    pub fn from_product(product: &Product, brands: &[Brand]) -> Self {
        Self {
            name: product.name.clone(),
            brand_id: product
                .brand
                .resolve(brands)
                .map(|b| b.id.as_string())
                .unwrap_or_default(),
            quantity: product.quantity.to_string(),
            price: product.price.to_string(),
        }
    }

    /// Check the form and build the request payload.
    pub fn validate(&self, brands: &[Brand]) -> Result<ProductDraft, ValidationError> {
        let name = self.name.trim();
        let required = [
            ("name", name),
            ("brand", self.brand_id.trim()),
            ("quantity", self.quantity.trim()),
            ("price", self.price.trim()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }

        let quantity: i64 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidNumber("Quantity"))?;
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidNumber("Price"))?;
        if !price.is_finite() {
            return Err(ValidationError::InvalidNumber("Price"));
        }
        if price <= 0.0 {
            return Err(ValidationError::NonPositivePrice);
        }
        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity);
        }

        let brand_id =
            BrandId::from_string(&self.brand_id).map_err(|_| ValidationError::UnknownBrand)?;
        if !brands.iter().any(|b| b.id == brand_id) {
            return Err(ValidationError::UnknownBrand);
        }

        Ok(ProductDraft {
            name: name.to_string(),
            brand_id,
            quantity,
            price,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("No dialog is open.")]
    NotOpen,
}

impl SubmitError {
    /// Message shown inside the dialog.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Transport(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

type SelectionObserver = Rc<dyn Fn(ModalSelection)>;

/// Owns the modal selection and routes successful submits into the
/// controller's mutation entry points.
pub struct ModalBridge<T: ?Sized = dyn CatalogTransport> {
    controller: CatalogController<T>,
    selection: Rc<Cell<ModalSelection>>,
    observer: Option<SelectionObserver>,
}

impl<T: ?Sized> Clone for ModalBridge<T> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            selection: Rc::clone(&self.selection),
            observer: self.observer.clone(),
        }
    }
}

impl<T: CatalogTransport + ?Sized> ModalBridge<T> {
    pub fn new(controller: CatalogController<T>) -> Self {
        Self {
            controller,
            selection: Rc::new(Cell::new(ModalSelection::Closed)),
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: impl Fn(ModalSelection) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn selection(&self) -> ModalSelection {
        self.selection.get()
    }

    fn set(&self, next: ModalSelection) {
        self.selection.set(next);
        if let Some(observer) = &self.observer {
            observer(next);
        }
    }

    fn open(&self, next: ModalSelection) -> bool {
        if self.selection().is_open() {
            log::debug!("{:?} requested while {:?} is open", next, self.selection());
            return false;
        }
        self.set(next);
        true
    }

    /// Open the create dialog. Refused while another dialog is open.
    pub fn open_create(&self) -> bool {
        self.open(ModalSelection::CreatingNew)
    }

    /// Open the detail dialog of `id`. Refused while another dialog is open.
    pub fn open_view(&self, id: ProductId) -> bool {
        self.open(ModalSelection::Viewing(id))
    }

    /// Close whatever is open. Never touches the catalog.
    pub fn cancel(&self) {
        self.set(ModalSelection::Closed);
    }

    /// Close the dialog only if it is still the one the submit started from.
    fn close_if(&self, origin: ModalSelection) {
        if self.selection() == origin {
            self.set(ModalSelection::Closed);
        }
    }

    /// Validate the form and create or update, depending on the open dialog.
    /// On failure the dialog stays open.
    pub async fn submit(&self, form: &ProductForm) -> Result<Product, SubmitError> {
        let origin = self.selection();
        let draft = match origin {
            ModalSelection::Closed => return Err(SubmitError::NotOpen),
            _ => form.validate(&self.controller.brands())?,
        };
        let saved = match origin {
            ModalSelection::Viewing(id) => self.controller.update(id, &draft).await?,
            _ => self.controller.create(&draft).await?,
        };
        self.close_if(origin);
        Ok(saved)
    }

    /// Delete the product shown in the detail dialog (after the user
    /// confirmed).
    pub async fn confirm_delete(&self) -> Result<(), SubmitError> {
        let origin = self.selection();
        let ModalSelection::Viewing(id) = origin else {
            return Err(SubmitError::NotOpen);
        };
        self.controller.delete(id).await?;
        self.close_if(origin);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{brands, page_of, product, FakeTransport};
    use futures::executor::block_on;

    fn bridge(fake: &Rc<FakeTransport>) -> ModalBridge<FakeTransport> {
        let controller = CatalogController::new(Rc::clone(fake));
        block_on(controller.load_brands());
        ModalBridge::new(controller)
    }

    fn valid_form() -> ProductForm {
        ProductForm {
            name: " Keyboard ".into(),
            brand_id: "2".into(),
            quantity: "0".into(),
            price: "49.90".into(),
        }
    }

    #[test]
    fn test_form_validation_rules() {
        let brands = brands();
        let draft = valid_form().validate(&brands).unwrap();
        assert_eq!(draft.name, "Keyboard");
        assert_eq!(draft.brand_id, BrandId(2));
        assert_eq!(draft.quantity, 0);

        let missing = ProductForm {
            price: String::new(),
            ..valid_form()
        };
        assert_eq!(
            missing.validate(&brands),
            Err(ValidationError::MissingField("price"))
        );

        let free = ProductForm {
            price: "0".into(),
            ..valid_form()
        };
        assert_eq!(free.validate(&brands), Err(ValidationError::NonPositivePrice));

        let negative = ProductForm {
            quantity: "-1".into(),
            ..valid_form()
        };
        assert_eq!(
            negative.validate(&brands),
            Err(ValidationError::NegativeQuantity)
        );

        let unknown = ProductForm {
            brand_id: "9".into(),
            ..valid_form()
        };
        assert_eq!(unknown.validate(&brands), Err(ValidationError::UnknownBrand));

        let garbage = ProductForm {
            quantity: "many".into(),
            ..valid_form()
        };
        assert_eq!(
            garbage.validate(&brands),
            Err(ValidationError::InvalidNumber("Quantity"))
        );
    }

    #[test]
    fn test_from_product_resolves_brand_by_name() {
        let form = ProductForm::from_product(&product(3), &brands());
        assert_eq!(form.name, "Product 3");
        assert_eq!(form.brand_id, "2");
        assert_eq!(form.quantity, "1");
        assert_eq!(form.price, "10");
    }

    #[test]
    fn test_only_one_dialog_at_a_time() {
        let fake = Rc::new(FakeTransport::default());
        let bridge = bridge(&fake);
        assert!(bridge.open_create());
        assert!(!bridge.open_view(ProductId(1)));
        assert_eq!(bridge.selection(), ModalSelection::CreatingNew);

        bridge.cancel();
        assert!(bridge.open_view(ProductId(1)));
        assert_eq!(bridge.selection(), ModalSelection::Viewing(ProductId(1)));
    }

    #[test]
    fn test_create_submit_closes_and_refreshes() {
        let fake = Rc::new(FakeTransport::default());
        let bridge = bridge(&fake);
        bridge.open_create();
        fake.push_page(Ok(page_of(1, 1)));

        let created = block_on(bridge.submit(&valid_form())).unwrap();

        assert_eq!(created.name, "Keyboard");
        assert_eq!(bridge.selection(), ModalSelection::Closed);
        assert_eq!(fake.created().len(), 1);
        assert_eq!(fake.list_calls().len(), 1);
    }

    #[test]
    fn test_view_submit_updates_that_product() {
        let fake = Rc::new(FakeTransport::default());
        let bridge = bridge(&fake);
        bridge.open_view(ProductId(8));
        fake.push_page(Ok(page_of(1, 1)));

        block_on(bridge.submit(&valid_form())).unwrap();

        let updated = fake.updated();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, ProductId(8));
        assert!(fake.created().is_empty());
        assert_eq!(bridge.selection(), ModalSelection::Closed);
    }

    #[test]
    fn test_invalid_form_never_reaches_transport() {
        let fake = Rc::new(FakeTransport::default());
        let bridge = bridge(&fake);
        bridge.open_create();

        let err = block_on(bridge.submit(&ProductForm::default())).unwrap_err();

        assert_eq!(err, SubmitError::Invalid(ValidationError::MissingField("name")));
        assert!(fake.created().is_empty());
        assert!(fake.list_calls().is_empty());
        assert_eq!(bridge.selection(), ModalSelection::CreatingNew);
    }

    #[test]
    fn test_failed_submit_keeps_dialog_open() {
        let fake = Rc::new(FakeTransport::default());
        let bridge = bridge(&fake);
        bridge.open_view(ProductId(4));
        fake.fail_mutations_with(TransportError::from_response(
            404,
            r#"{"message":"Product not found with ID: 4"}"#,
        ));

        let err = block_on(bridge.confirm_delete()).unwrap_err();

        assert_eq!(err.user_message(), "Product not found with ID: 4");
        assert_eq!(bridge.selection(), ModalSelection::Viewing(ProductId(4)));
        assert!(fake.list_calls().is_empty());
    }

    #[test]
    fn test_confirm_delete_closes_dialog() {
        let fake = Rc::new(FakeTransport::default());
        let bridge = bridge(&fake);
        bridge.open_view(ProductId(4));
        fake.push_page(Ok(page_of(0, 0)));

        block_on(bridge.confirm_delete()).unwrap();

        assert_eq!(fake.deleted(), vec![ProductId(4)]);
        assert_eq!(bridge.selection(), ModalSelection::Closed);
    }

    #[test]
    fn test_cancel_and_closed_submit_have_no_side_effects() {
        let fake = Rc::new(FakeTransport::default());
        let bridge = bridge(&fake);
        bridge.open_create();
        bridge.cancel();

        assert_eq!(
            block_on(bridge.submit(&valid_form())),
            Err(SubmitError::NotOpen)
        );
        assert_eq!(block_on(bridge.confirm_delete()), Err(SubmitError::NotOpen));
        assert!(fake.created().is_empty());
        assert!(fake.deleted().is_empty());
        assert!(fake.list_calls().is_empty());
    }
}

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use super::domain::{CreateMenuInput, Menu, NewMenu, NewMenuItem};
use super::repository::MenuPersistence;
use crate::errors::{ServiceError, Violation};
use crate::menu_group::repository::MenuGroupLookup;
use crate::product::repository::ProductLookup;
use crate::product::service::{price_limit, validate_price};

/// Menu business service: validation against products and menu groups, then an atomic write.
pub struct MenuService<P: ?Sized, G: ?Sized, M: ?Sized> {
    products: Arc<P>,
    menu_groups: Arc<G>,
    menus: Arc<M>,
}

impl<P, G, M> MenuService<P, G, M>
where
    P: ProductLookup + ?Sized,
    G: MenuGroupLookup + ?Sized,
    M: MenuPersistence + ?Sized,
{
    pub fn new(products: Arc<P>, menu_groups: Arc<G>, menus: Arc<M>) -> Self {
        Self { products, menu_groups, menus }
    }

    /// Validate and persist a menu with its items.
    ///
    /// Checks run in order and the first failure wins: price, menu group,
    /// items and their products, then price against the items total. The menu
    /// and its items are written in one unit of work only after every check
    /// passes.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use rust_decimal::Decimal;
    /// use service::menu::{MenuService, domain::{CreateMenuInput, MenuItemInput}, repository::mock::MockMenuRepository};
    /// use service::menu_group::repository::{MenuGroupRepository, mock::MockMenuGroupRepository};
    /// use service::product::{domain::NewProduct, repository::{ProductRepository, mock::MockProductRepository}};
    ///
    /// let products = Arc::new(MockProductRepository::default());
    /// let groups = Arc::new(MockMenuGroupRepository::default());
    /// let mango = tokio_test::block_on(products.save(NewProduct { name: "mango".into(), price: Decimal::from(1000) })).unwrap();
    /// let group = tokio_test::block_on(groups.save("new menus")).unwrap();
    ///
    /// let svc = MenuService::new(products, groups, Arc::new(MockMenuRepository::default()));
    /// let input = CreateMenuInput {
    ///     name: "double mango".into(),
    ///     price: Some(Decimal::from(2000)),
    ///     menu_group_id: group.id,
    ///     items: vec![MenuItemInput { product_id: mango.id, quantity: 2 }],
    /// };
    /// let menu = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(menu.items.len(), 1);
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name, menu_group_id = input.menu_group_id, items = input.items.len()))]
    pub async fn create(&self, input: CreateMenuInput) -> Result<Menu, ServiceError> {
        let price = match self.validate(&input).await {
            Ok(price) => price,
            Err(e) => {
                debug!(error = %e, code = e.code(), "menu_rejected");
                return Err(e);
            }
        };

        // Any early return drops the unit of work, discarding its writes.
        let mut uow = self.menus.begin().await?;
        let mut menu = uow
            .save(NewMenu { name: input.name, price, menu_group_id: input.menu_group_id })
            .await?;
        for item in input.items {
            let saved = uow
                .save_item(NewMenuItem { menu_id: menu.id, product_id: item.product_id, quantity: item.quantity })
                .await?;
            menu.items.push(saved);
        }
        uow.commit().await?;

        info!(menu_id = menu.id, price = %menu.price, items = menu.items.len(), "menu_created");
        Ok(menu)
    }

    /// Every persisted menu with its items, in insertion order.
    pub async fn list(&self) -> Result<Vec<Menu>, ServiceError> {
        self.menus.find_all().await
    }

    /// Read-only checks; returns the validated price.
    async fn validate(&self, input: &CreateMenuInput) -> Result<Decimal, ServiceError> {
        let price = validate_price(input.price)?;

        if !self.menu_groups.exists_by_id(input.menu_group_id).await? {
            return Err(Violation::UnknownMenuGroup(input.menu_group_id).into());
        }

        if input.items.is_empty() {
            return Err(Violation::EmptyItems.into());
        }
        let mut total = Decimal::ZERO;
        for item in &input.items {
            if item.quantity <= 0 {
                return Err(Violation::NonPositiveQuantity { product_id: item.product_id, quantity: item.quantity }.into());
            }
            let product = self
                .products
                .find_by_id(item.product_id)
                .await?
                .ok_or(Violation::UnknownProduct(item.product_id))?;
            total = product
                .price
                .checked_mul(Decimal::from(item.quantity))
                .and_then(|line| total.checked_add(line))
                .ok_or(Violation::TotalOverflow)?;
        }
        // Must fit the menu price column
        if total >= price_limit() {
            return Err(Violation::TotalOverflow.into());
        }

        if price != total {
            return Err(Violation::PriceMismatch { declared: price, total }.into());
        }
        Ok(price)
    }
}

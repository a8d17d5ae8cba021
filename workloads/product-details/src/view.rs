//! The product page view: one session per route product id.

use serde::Serialize;
use tracing::{debug, info, warn};
use turbo_catalog::catalog::ProductDetails;
use turbo_catalog::selection::SelectionMap;
use turbo_catalog::{GlobalId, VariantId};

use crate::collaborators::{Cart, CartLine, Location, NetworkStatus, SearchQueryAttributes};
use crate::config::PageConfig;
use crate::data::{Fetched, ProductQueryResponse, ProductSource};
use crate::error::{FetchError, PageError};
use crate::gate::{DisplayableProduct, PageBranch};
use crate::head::HeadTags;
use crate::meta::{extract_meta, MetadataRecord};
use crate::selection::AttributeSelection;

/// Identifies the fetch of one navigation.
///
/// Completions carrying a ticket from an earlier navigation are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    route_id: String,
    global_id: GlobalId,
}

impl FetchTicket {
    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    pub fn global_id(&self) -> &GlobalId {
        &self.global_id
    }
}

/// Everything the product branch renders.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    pub product: ProductDetails,
    pub selection: SelectionMap,
    /// First variant matching the selection, if any.
    pub selected_variant: Option<VariantId>,
    pub meta: MetadataRecord,
    pub head: HeadTags,
    pub cart: Vec<CartLine>,
}

/// Result of rendering the page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "branch", content = "page", rename_all = "snake_case")]
pub enum PageOutcome {
    Product(Box<ProductPage>),
    NotFound,
    Offline,
    /// Nothing to render yet.
    Pending,
}

impl PageOutcome {
    pub fn branch(&self) -> PageBranch {
        match self {
            PageOutcome::Product(_) => PageBranch::Product,
            PageOutcome::NotFound => PageBranch::NotFound,
            PageOutcome::Offline => PageBranch::Offline,
            PageOutcome::Pending => PageBranch::Pending,
        }
    }

    pub fn as_product(&self) -> Option<&ProductPage> {
        match self {
            PageOutcome::Product(page) => Some(page),
            _ => None,
        }
    }
}

/// State of the current navigation.
#[derive(Debug)]
struct Session {
    ticket: FetchTicket,
    fetched: Fetched<ProductDetails>,
    /// Present while the product branch is mounted.
    selection: Option<AttributeSelection>,
}

/// Product detail page.
pub struct ProductView<S, N, U, C> {
    source: S,
    network: N,
    url: U,
    cart: C,
    config: PageConfig,
    session: Option<Session>,
    next_seq: u64,
}

impl<S, N, U, C> ProductView<S, N, U, C>
where
    S: ProductSource,
    N: NetworkStatus,
    U: SearchQueryAttributes + Location,
    C: Cart,
{
    pub fn new(source: S, network: N, url: U, cart: C) -> Self {
        Self {
            source,
            network,
            url,
            cart,
            config: PageConfig::default(),
            session: None,
            next_seq: 0,
        }
    }

    /// Set the page configuration.
    pub fn with_config(mut self, config: PageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn url(&self) -> &U {
        &self.url
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    pub fn cart(&self) -> &C {
        &self.cart
    }

    /// Ticket of the current navigation.
    pub fn current_ticket(&self) -> Option<&FetchTicket> {
        self.session.as_ref().map(|session| &session.ticket)
    }

    /// Open a new session for a route product id.
    ///
    /// The previous session, including its selection state, is dropped.
    pub fn navigate(&mut self, route_id: &str) -> Result<FetchTicket, PageError> {
        let global_id = GlobalId::new(&self.config.catalog.global_id_type, route_id)?;

        self.next_seq += 1;
        let ticket = FetchTicket {
            seq: self.next_seq,
            route_id: route_id.to_string(),
            global_id,
        };

        info!(route_id, global_id = %ticket.global_id, "Navigating to product");
        self.session = Some(Session {
            ticket: ticket.clone(),
            fetched: Fetched::Pending,
            selection: None,
        });
        Ok(ticket)
    }

    /// Deliver the fetch result of a navigation.
    ///
    /// Returns `None` when the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ProductQueryResponse, FetchError>,
    ) -> Option<PageOutcome> {
        let session = match self.session.as_mut() {
            Some(session) if session.ticket.seq == ticket.seq => session,
            _ => {
                warn!(route_id = %ticket.route_id, "Dropping stale product response");
                return None;
            }
        };

        session.fetched = match result {
            Ok(response) => {
                for error in &response.errors {
                    warn!(route_id = %ticket.route_id, error = %error.message, "Product query error");
                }
                response.into_fetched()
            }
            Err(e) => {
                warn!(route_id = %ticket.route_id, error = %e, "Product fetch failed");
                Fetched::Failed(e.to_string())
            }
        };

        let outcome = self.render();
        info!(route_id = %ticket.route_id, branch = ?outcome.branch(), "Product page resolved");
        Some(outcome)
    }

    /// Render the current state.
    ///
    /// On the product branch this also runs the selection stages, which may
    /// clear the page URL.
    pub fn render(&mut self) -> PageOutcome {
        let Some(session) = self.session.as_mut() else {
            return PageOutcome::Pending;
        };

        let branch = PageBranch::select(&session.fetched, self.network.is_online());
        debug!(?branch, "Selected page branch");

        let product = match session.fetched.as_present().and_then(DisplayableProduct::new) {
            Some(product) if branch == PageBranch::Product => product,
            _ => {
                session.selection = None;
                return match branch {
                    PageBranch::NotFound => PageOutcome::NotFound,
                    PageBranch::Offline => PageOutcome::Offline,
                    _ => PageOutcome::Pending,
                };
            }
        };

        let state = session.selection.get_or_insert_with(AttributeSelection::new);
        state.sync(product.variants(), &mut self.url);

        let meta = extract_meta(&product, &self.url, &self.config.meta);
        let selection = state.selection().clone();
        let selected_variant = selection
            .find_variant(product.variants())
            .map(|variant| variant.id.clone());

        PageOutcome::Product(Box::new(ProductPage {
            product: product.product().clone(),
            selection,
            selected_variant,
            head: HeadTags::from_meta(&meta),
            meta,
            cart: self.cart.items().to_vec(),
        }))
    }

    /// Navigate, fetch and render.
    pub async fn load(&mut self, route_id: &str) -> Result<PageOutcome, PageError> {
        let ticket = self.navigate(route_id)?;
        let result = self.source.product_details(ticket.global_id()).await;
        Ok(self.complete(&ticket, result).unwrap_or(PageOutcome::Pending))
    }

    /// Add a variant to the cart.
    pub fn add_to_cart(&mut self, variant: &VariantId, quantity: u32) {
        debug!(variant = %variant, quantity, "Adding to cart");
        self.cart.add_item(variant, quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{MemoryCart, PageUrl, StaticNetworkStatus};
    use crate::data::InMemoryProductSource;
    use turbo_catalog::catalog::{ProductPricing, ProductVariant, SelectedAttribute};
    use turbo_catalog::{AttributeId, Money};

    type View = ProductView<InMemoryProductSource, StaticNetworkStatus, PageUrl, MemoryCart>;

    fn tee(db_id: &str) -> ProductDetails {
        let mut product = ProductDetails::new(GlobalId::product(db_id).unwrap().to_product_id());
        product.name = Some("Tee".to_string());
        product.description = Some("Soft cotton tee".to_string());
        product.pricing = Some(ProductPricing::fixed(Money::new(20.0, "USD")));
        product.variants = Some(vec![
            ProductVariant::new("v-red-m")
                .with_attribute(SelectedAttribute::new("attr-color", "color", ["Red"]))
                .with_attribute(SelectedAttribute::new("attr-size", "size", ["M"])),
            ProductVariant::new("v-blue-l")
                .with_attribute(SelectedAttribute::new("attr-color", "color", ["Blue"]))
                .with_attribute(SelectedAttribute::new("attr-size", "size", ["L"])),
        ]);
        product
    }

    fn view(url: &str) -> View {
        let source = InMemoryProductSource::new().with_product(tee("72"));
        ProductView::new(
            source,
            StaticNetworkStatus::online(),
            PageUrl::parse(url).unwrap(),
            MemoryCart::new(),
        )
    }

    // === load ===

    #[tokio::test]
    async fn test_load_renders_product_with_selection() {
        let mut view = view("https://shop.example.com/product/72?color=Blue&size=L");

        let outcome = view.load("72").await.unwrap();
        let page = outcome.as_product().unwrap();

        assert_eq!(page.selection.get(&AttributeId::new("attr-color")), Some("Blue"));
        assert_eq!(page.selection.get(&AttributeId::new("attr-size")), Some("L"));
        assert_eq!(page.selected_variant, Some(VariantId::new("v-blue-l")));
        assert_eq!(page.meta.title, "Tee");
        assert_eq!(view.url().href(), "https://shop.example.com/product/72");
    }

    #[tokio::test]
    async fn test_metadata_url_is_cleared_url() {
        let mut view = view("https://shop.example.com/product/72?color=Red");
        let outcome = view.load("72").await.unwrap();

        assert_eq!(outcome.as_product().unwrap().meta.url, "https://shop.example.com/product/72");
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let mut view = view("https://shop.example.com/product/99");
        let outcome = view.load("99").await.unwrap();

        assert_eq!(outcome.branch(), PageBranch::NotFound);
        assert_eq!(view.url().clear_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_fetch_when_offline() {
        let source = InMemoryProductSource::new().unavailable("connection refused");
        let mut view = ProductView::new(
            source,
            StaticNetworkStatus::offline(),
            PageUrl::parse("https://shop.example.com/product/72").unwrap(),
            MemoryCart::new(),
        );

        assert_eq!(view.load("72").await.unwrap().branch(), PageBranch::Offline);

        view.network().set_online(true);
        assert_eq!(view.render().branch(), PageBranch::NotFound);
    }

    #[tokio::test]
    async fn test_empty_route_id_is_rejected() {
        let mut view = view("https://shop.example.com/product/");
        assert!(matches!(view.load(" ").await, Err(PageError::Catalog(_))));
    }

    // === Sessions ===

    #[test]
    fn test_render_without_session_is_pending() {
        let mut view = view("https://shop.example.com/");
        assert_eq!(view.render().branch(), PageBranch::Pending);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut view = view("https://shop.example.com/product/72");

        let first = view.navigate("71").unwrap();
        let second = view.navigate("72").unwrap();

        assert!(view.complete(&first, Ok(ProductQueryResponse::not_found())).is_none());
        assert_eq!(view.render().branch(), PageBranch::Pending);

        let outcome = view
            .complete(&second, Ok(ProductQueryResponse::found(tee("72"))))
            .unwrap();
        assert_eq!(outcome.branch(), PageBranch::Product);
        assert_eq!(view.current_ticket().unwrap().route_id(), "72");
    }

    #[test]
    fn test_rerender_clears_url_once() {
        let mut view = view("https://shop.example.com/product/72?color=Red");
        let ticket = view.navigate("72").unwrap();
        view.complete(&ticket, Ok(ProductQueryResponse::found(tee("72"))));

        for _ in 0..3 {
            let outcome = view.render();
            let page = outcome.as_product().unwrap();
            assert_eq!(page.selection.get(&AttributeId::new("attr-color")), Some("Red"));
        }

        assert_eq!(view.url().clear_count(), 1);
    }

    #[test]
    fn test_navigation_resets_selection() {
        let mut view = view("https://shop.example.com/product/72?color=Red");
        let ticket = view.navigate("72").unwrap();
        view.complete(&ticket, Ok(ProductQueryResponse::found(tee("72"))));

        let ticket = view.navigate("72").unwrap();
        let outcome = view
            .complete(&ticket, Ok(ProductQueryResponse::found(tee("72"))))
            .unwrap();

        assert!(outcome.as_product().unwrap().selection.is_empty());
        assert_eq!(view.url().clear_count(), 2);
    }

    #[test]
    fn test_partial_product_renders_nothing() {
        let mut product = tee("72");
        product.pricing = None;

        let mut view = view("https://shop.example.com/product/72?color=Red");
        let ticket = view.navigate("72").unwrap();
        let outcome = view.complete(&ticket, Ok(ProductQueryResponse::found(product))).unwrap();

        assert_eq!(outcome.branch(), PageBranch::Pending);
        assert_eq!(view.url().clear_count(), 0);
    }

    // === Cart ===

    #[tokio::test]
    async fn test_add_to_cart_passes_through() {
        let mut view = view("https://shop.example.com/product/72");
        view.load("72").await.unwrap();

        view.add_to_cart(&VariantId::new("v-red-m"), 2);
        let outcome = view.render();

        assert_eq!(view.cart().items().len(), 1);
        assert_eq!(outcome.as_product().unwrap().cart[0].quantity, 2);
    }
}

//! Display gate: decides whether a product can be shown and which page
//! branch renders.

use turbo_catalog::catalog::{ProductDetails, ProductPricing, ProductVariant};

use crate::data::Fetched;

/// Whether the product carries every field the page needs.
///
/// True iff the product exists and its description, name, pricing and
/// variants are all present.
pub fn can_display(product: Option<&ProductDetails>) -> bool {
    product.and_then(DisplayableProduct::new).is_some()
}

/// A product whose required fields are known to be present.
#[derive(Debug, Clone, Copy)]
pub struct DisplayableProduct<'a> {
    product: &'a ProductDetails,
    description: &'a str,
    name: &'a str,
    pricing: &'a ProductPricing,
    variants: &'a [ProductVariant],
}

impl<'a> DisplayableProduct<'a> {
    /// Check the product; `None` if any required field is missing.
    pub fn new(product: &'a ProductDetails) -> Option<Self> {
        Some(Self {
            product,
            description: product.description.as_deref()?,
            name: product.name.as_deref()?,
            pricing: product.pricing.as_ref()?,
            variants: product.variants.as_deref()?,
        })
    }

    /// The full product, for optional fields.
    pub fn product(&self) -> &'a ProductDetails {
        self.product
    }

    pub fn description(&self) -> &'a str {
        self.description
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn pricing(&self) -> &'a ProductPricing {
        self.pricing
    }

    pub fn variants(&self) -> &'a [ProductVariant] {
        self.variants
    }
}

/// Which page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBranch {
    /// The product page.
    Product,
    /// The not-found page.
    NotFound,
    /// The offline placeholder.
    Offline,
    /// Nothing yet.
    Pending,
}

impl PageBranch {
    /// Select the branch for the current load state.
    ///
    /// A displayable product always wins. A confirmed miss is not-found even
    /// when offline. A failed request is not-found while online.
    pub fn select(fetched: &Fetched<ProductDetails>, is_online: bool) -> Self {
        if can_display(fetched.as_present()) {
            return PageBranch::Product;
        }

        match fetched {
            Fetched::Missing => PageBranch::NotFound,
            _ if !is_online => PageBranch::Offline,
            Fetched::Failed(_) => PageBranch::NotFound,
            _ => PageBranch::Pending,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;
    use turbo_catalog::Money;

    fn product(description: bool, name: bool, pricing: bool, variants: bool) -> ProductDetails {
        let mut product = ProductDetails::new("UHJvZHVjdDo3Mg==");
        product.description = description.then(|| "{}".to_string());
        product.name = name.then(|| "Tee".to_string());
        product.pricing = pricing.then(|| ProductPricing::fixed(Money::new(1.0, "USD")));
        product.variants = variants.then(Vec::new);
        product
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

        #[test]
        fn test_product_branch_iff_displayable(
            description in any::<bool>(),
            name in any::<bool>(),
            pricing in any::<bool>(),
            variants in any::<bool>(),
            is_online in any::<bool>(),
        ) {
            let displayable = description && name && pricing && variants;
            let fetched = Fetched::Present(product(description, name, pricing, variants));
            let branch = PageBranch::select(&fetched, is_online);

            prop_assert_eq!(can_display(fetched.as_present()), displayable);
            prop_assert_eq!(branch == PageBranch::Product, displayable);
            prop_assert_ne!(branch, PageBranch::NotFound);
        }
    }
}

//! # Built-in Menu
//!
//! The bakery's house menu, used when no menu file is configured.
//!
//! Prices are in cents. Order here is display order on the menu page.

use bakehouse_core::{Money, Product};

/// (name, price in cents, image, description)
const HOUSE_MENU: &[(&str, i64, &str, &str)] = &[
    (
        "Salted Caramel Toffee Cheesecake",
        950,
        "https://i.pinimg.com/736x/67/62/a5/6762a58e0929c11cd8b195c792eada3f.jpg",
        "Decadent New York-style cheesecake topped with a cascading salted caramel glaze and handmade toffee crunch.",
    ),
    (
        "Fresh Strawberry Glaze Cheesecake",
        950,
        "https://i.pinimg.com/1200x/de/a0/1a/dea01a87b4e0389b06ea43a19e6af30c.jpg",
        "Classic New York-style cheesecake layered with a vibrant strawberry coulis and topped with hand-picked, macerated fresh strawberries.",
    ),
    (
        "Berry Harvest Buttermilk Pancakes",
        1250,
        "https://i.pinimg.com/1200x/46/71/ed/4671edb2dcc08e47761236613072b09e.jpg",
        "A fluffy triple-stack of golden buttermilk pancakes topped with a dollop of whipped cream, mountain-grown berries, and a generous drizzle of pure maple syrup.",
    ),
    (
        "Banana Hazelnut Crepes Delight",
        1075,
        "https://i.pinimg.com/1200x/7d/44/95/7d4495c4580062ebbd49a4e13ccf1e69.jpg",
        "Delicate, golden-brown crepes layered with rich hazelnut chocolate spread and fresh banana slices, finished with a dusting of powdered sugar.",
    ),
    (
        "Rustic Heart-Shaped Sourdough",
        950,
        "https://i.pinimg.com/736x/46/bb/e8/46bbe8f813cc3b0bde0521d624e1bf06.jpg",
        "A specialty artisan loaf hand-scored into a heart shape, featuring a crisp floured crust and a light, tangy interior.",
    ),
    (
        "Triple-Layer Strawberry Fudge Cake",
        1200,
        "https://i.pinimg.com/736x/d4/b3/34/d4b334ebba7d60699317bb6abd873833.jpg",
        "A decadent multi-layered chocolate cake featuring rich cocoa frosting, a luscious dark chocolate pour, and a crown of fresh whole strawberries.",
    ),
    (
        "Classic Tiramisu Square Cake",
        875,
        "https://i.pinimg.com/736x/ac/65/db/ac65db648783045069e34d1b14f13d5b.jpg",
        "Traditional Italian layers of espresso-soaked ladyfingers and light mascarpone cream, finished with a generous dusting of cocoa.",
    ),
    (
        "Blueberry Glaze Cheesecake",
        925,
        "https://i.pinimg.com/736x/04/67/1b/04671b9c29bf7e0440bd38280dbdd26f.jpg",
        "A velvety cheesecake slice on a golden graham crust, smothered in a vibrant blueberry reduction and topped with fresh, plump blueberries and mint.",
    ),
    (
        "Pistachio Almond Croissant",
        650,
        "https://i.pinimg.com/736x/3c/f5/e6/3cf5e64ad91f6ef4ddc327c9708485a5.jpg",
        "A golden, flaky butter croissant generously drizzled with a sweet pistachio cream glaze and topped with toasted almond slivers.",
    ),
    (
        "Gourmet Cinnamon cream Roll",
        575,
        "https://i.pinimg.com/736x/97/89/40/9789408e72421bca27f3292ba42cacaa.jpg",
        "A warm, soft-baked cinnamon swirl roll heavily frosted with a rich, melting cream cheese glaze.",
    ),
    (
        "Chocolate Fudge Brownie Stack",
        850,
        "https://i.pinimg.com/736x/b1/db/98/b1db98a8182316a568052e8cdb3e88d9.jpg",
        "Double-stacked, dense chocolate fudge brownies smothered in warm chocolate ganache and topped with fresh strawberry halves.",
    ),
    (
        "Festive Chocolate Yule Log cake",
        1400,
        "https://i.pinimg.com/1200x/f3/76/b9/f376b909711de02a3470147bbde197de.jpg",
        "A delicate chocolate sponge roll filled with cocoa cream, coated in chocolate ganache 'bark' and finished with festive holly berries.",
    ),
];

/// Returns the house menu as unvalidated product records.
///
/// [`Catalog::default_menu`](crate::Catalog::default_menu) wraps this in a
/// validated catalog.
pub fn house_menu() -> Vec<Product> {
    HOUSE_MENU
        .iter()
        .map(|(name, cents, image, description)| {
            Product::unchecked(*name, Money::from_cents(*cents), *image, *description)
        })
        .collect()
}

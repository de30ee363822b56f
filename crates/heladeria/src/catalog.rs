//! The storefront's product catalog.
//!
//! The catalog is fixed at startup: [`seed`] lists the products in the order the
//! product actor assigns ids to them, so the first entry becomes product 1.

use crate::model::{Category, Product, ProductCreate, ProductId, StockUnit};

#[allow(clippy::too_many_arguments)]
fn item(
    name: &str,
    category: Category,
    flavors: &[&str],
    price: u32,
    stock_unit: StockUnit,
    stock: u32,
    image: &str,
    description: &str,
) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        category,
        flavors: (!flavors.is_empty()).then(|| flavors.iter().map(|f| f.to_string()).collect()),
        price,
        stock_unit,
        stock,
        image_url: format!("/{image}.png"),
        description: description.to_string(),
    }
}

/// Creation payloads for every catalog product, in id order.
pub fn seed() -> Vec<ProductCreate> {
    use Category::*;
    use StockUnit::*;

    vec![
        item(
            "Palito de Agua",
            Bars,
            &["Limón", "Frutilla", "Naranja", "Manzana Verde"],
            500,
            Unit,
            100,
            "palito-agua",
            "Refrescante palito de agua con sabores naturales",
        ),
        item(
            "Palito Bombón",
            Bars,
            &["Chocolate", "Dulce de Leche", "Vainilla"],
            800,
            Unit,
            80,
            "palito-bombon",
            "Cremoso palito cubierto de chocolate",
        ),
        item(
            "Palito de Crema",
            Bars,
            &["Vainilla", "Chocolate", "Frutilla", "Dulce de Leche"],
            650,
            Unit,
            90,
            "palito-crema",
            "Suave palito de crema con sabores clásicos",
        ),
        item(
            "Tacita de Chocolate",
            Cups,
            &[],
            1200,
            Unit,
            50,
            "tacita-chocolate",
            "Deliciosa tacita de helado de chocolate premium",
        ),
        item(
            "Tacita de Frutilla",
            Cups,
            &[],
            1200,
            Unit,
            45,
            "tacita-frutilla",
            "Tacita de helado de frutilla con trozos naturales",
        ),
        item(
            "Tacita Bomboncitos",
            Cups,
            &[],
            1400,
            Unit,
            40,
            "tacita-bomboncitos",
            "Tacita con mini bombones de chocolate",
        ),
        item(
            "Cono Triple",
            Cones,
            &["Chocolate", "Vainilla", "Frutilla"],
            1800,
            Unit,
            30,
            "cono-triple",
            "Cono con tres sabores clásicos",
        ),
        item(
            "Torta Chocolate",
            Cakes,
            &[],
            3500,
            Unit,
            10,
            "torta-chocolate",
            "Torta helada de chocolate para 8-10 porciones",
        ),
        item(
            "Torta Especial Tiramisú",
            Cakes,
            &[],
            4200,
            Unit,
            8,
            "torta-tiramisu",
            "Torta helada especial sabor tiramisú",
        ),
        item(
            "Postre Familiar Almendrado",
            Desserts,
            &[],
            2800,
            Unit,
            15,
            "postre-almendrado",
            "Postre familiar de almendrado para 12 porciones",
        ),
        item(
            "Postre Individual Frutilla",
            Desserts,
            &[],
            800,
            Unit,
            25,
            "postre-individual-frutilla",
            "Postre individual de frutilla",
        ),
        item(
            "Chipás Frizados",
            Criollos,
            &[],
            1500,
            Bag,
            20,
            "chipas-frizados",
            "Bolsa de chipás frizados para hornear (12 unidades)",
        ),
        item(
            "Donas Frizadas",
            Criollos,
            &[],
            1800,
            Bag,
            18,
            "donas-frizadas",
            "Bolsa de donas frizadas para hornear (8 unidades)",
        ),
    ]
}

/// The catalog as the product actor holds it once seeded.
pub fn products() -> Vec<Product> {
    seed()
        .into_iter()
        .zip(1u32..)
        .map(|(params, id)| Product::from_params(ProductId(id), params))
        .collect()
}

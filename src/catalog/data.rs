//! Embedded sample dataset

use super::models::Product;
use rust_decimal::Decimal;

/// Builds one product. `price_cents` is the price in hundredths.
#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    price_cents: i64,
    category: &str,
    image: &str,
    description: &str,
    stock: u32,
    rating: f32,
    reviews: u32,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Decimal::new(price_cents, 2),
        category: category.to_string(),
        image: format!("https://images.unsplash.com/{image}"),
        description: description.to_string(),
        stock,
        rating,
        reviews,
    }
}

/// The 18 products the demo storefront ships with.
pub fn sample_products() -> Vec<Product> {
    vec![
        product("1", "Premium Wireless Headphones", 29999, "Electronics",
            "photo-1505740420928-5e560c06d30e",
            "High-quality wireless headphones with noise cancellation", 15, 4.8, 124),
        product("2", "Smart Fitness Watch", 19999, "Electronics",
            "photo-1523275335684-37898b6baf30",
            "Track your fitness goals with this advanced smartwatch", 23, 4.6, 89),
        product("3", "Organic Cotton T-Shirt", 2999, "Clothing",
            "photo-1521572163474-6864f9cf17ab",
            "Comfortable and sustainable cotton t-shirt", 45, 4.4, 67),
        product("4", "Professional Laptop", 129999, "Electronics",
            "photo-1496181133206-80ce9b88a853",
            "High-performance laptop for professionals", 8, 4.9, 156),
        product("5", "Designer Sunglasses", 14999, "Accessories",
            "photo-1572635196237-14b3f281503f",
            "Stylish sunglasses with UV protection", 32, 4.3, 42),
        product("6", "Wireless Speaker", 8999, "Electronics",
            "photo-1608043152269-423dbba4e7e1",
            "Portable wireless speaker with rich sound", 28, 4.5, 93),
        product("7", "Running Shoes", 12999, "Sports",
            "photo-1542291026-7eec264c27ff",
            "Comfortable running shoes for athletes", 40, 4.7, 203),
        product("8", "Coffee Maker", 8999, "Home",
            "photo-1495474472287-4d71bcdd2085",
            "Premium coffee maker for the perfect brew", 25, 4.6, 158),
        product("9", "Leather Wallet", 4999, "Accessories",
            "photo-1553062407-98eeb64c6a62",
            "Genuine leather wallet with multiple compartments", 60, 4.4, 89),
        product("10", "Gaming Mouse", 7999, "Electronics",
            "photo-1527814050087-3793815479db",
            "High-precision gaming mouse with RGB lighting", 35, 4.8, 127),
        product("11", "Yoga Mat", 3999, "Sports",
            "photo-1544367567-0f2fcb009e0b",
            "Non-slip yoga mat for comfortable workouts", 50, 4.5, 76),
        product("12", "Ceramic Plant Pot", 2499, "Home",
            "photo-1485955900006-10f4d324d411",
            "Beautiful ceramic pot perfect for indoor plants", 80, 4.3, 45),
        product("13", "Winter Jacket", 19999, "Clothing",
            "photo-1551028719-00167b16eac5",
            "Warm and stylish winter jacket for cold weather", 20, 4.7, 112),
        product("14", "Smartphone Case", 1999, "Accessories",
            "photo-1556656793-08538906a9f8",
            "Protective case for your smartphone with elegant design", 100, 4.2, 234),
        product("15", "Basketball", 3499, "Sports",
            "photo-1546519638-68e109498ffc",
            "Official size basketball for indoor and outdoor play", 45, 4.6, 88),
        product("16", "Table Lamp", 6999, "Home",
            "photo-1507003211169-0a1dd7228f2d",
            "Modern table lamp with adjustable brightness", 30, 4.4, 67),
        product("17", "Backpack", 7999, "Accessories",
            "photo-1553062407-98eeb64c6a62",
            "Durable backpack perfect for travel and daily use", 55, 4.5, 145),
        product("18", "Jeans", 8999, "Clothing",
            "photo-1542272604-787c3835535d",
            "Classic denim jeans with perfect fit", 65, 4.3, 189),
    ]
}

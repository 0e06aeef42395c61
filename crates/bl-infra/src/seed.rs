//! Seed marketplace content: the launch product catalog and the editorial
//! articles shown on the insights page.

use bl_core::catalog::{InsuranceType, Product, ProductCatalog, ProductId};
use bl_core::content::BlogPost;

fn product(
    id: &str,
    name: &str,
    provider: &str,
    insurance_type: InsuranceType,
    base_price: f64,
    rating: f64,
    benefits: &[&str],
    description: &str,
    logo_url: &str,
) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_string(),
        provider: provider.to_string(),
        insurance_type,
        base_price,
        rating,
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
        description: description.to_string(),
        logo_url: logo_url.to_string(),
    }
}

/// The launch catalog. Ids are stable: the persisted comparison selection
/// references them across sessions.
pub fn seed_catalog() -> ProductCatalog {
    ProductCatalog::new(vec![
        product(
            "1",
            "Jubilee Motoring Plus",
            "Jubilee Insurance",
            InsuranceType::Motor,
            12_500.0,
            4.8,
            &[
                "Comprehensive coverage",
                "24/7 Roadside assistance",
                "Windscreen cover",
                "Excess protector",
            ],
            "Leading motor insurance in East Africa with rapid claim settlement.",
            "https://images.unsplash.com/photo-1549890762-0a3f8933ad76?auto=format&fit=crop&q=80&w=100",
        ),
        product(
            "2",
            "Britam Milele Health",
            "Britam",
            InsuranceType::Health,
            15_000.0,
            4.7,
            &[
                "Inpatient up to 10M",
                "Maternity cover",
                "Chronic conditions included",
                "Global referral",
            ],
            "Comprehensive medical insurance for individuals and families.",
            "https://images.unsplash.com/photo-1551601651-2a8555f1a136?auto=format&fit=crop&q=80&w=100",
        ),
        product(
            "3",
            "APA Afya Nafuu",
            "APA Insurance",
            InsuranceType::Health,
            8_500.0,
            4.5,
            &[
                "Affordable premiums",
                "Inpatient & Outpatient",
                "Dental/Optical options",
                "Last expense",
            ],
            "Budget-friendly healthcare for growing Kenyan families.",
            "https://images.unsplash.com/photo-1505751172876-fa1923c5c528?auto=format&fit=crop&q=80&w=100",
        ),
        product(
            "4",
            "UAP Old Mutual Motor",
            "UAP Old Mutual",
            InsuranceType::Motor,
            11_000.0,
            4.6,
            &[
                "Loss of keys cover",
                "Personal accident",
                "Authorized repairers",
                "Political violence cover",
            ],
            "High-tier protection for your luxury and utility vehicles.",
            "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?auto=format&fit=crop&q=80&w=100",
        ),
        product(
            "5",
            "GA Smart Travel",
            "GA Insurance",
            InsuranceType::Travel,
            2_500.0,
            4.9,
            &[
                "Emergency medical",
                "Baggage loss",
                "Trip cancellation",
                "COVID-19 cover",
            ],
            "Worry-free travel with worldwide assistance networks.",
            "https://images.unsplash.com/photo-1436491865332-7a61a109c0f3?auto=format&fit=crop&q=80&w=100",
        ),
        product(
            "6",
            "Madison Life Planner",
            "Madison Insurance",
            InsuranceType::Life,
            5_000.0,
            4.4,
            &[
                "Education savings",
                "Retirement plan",
                "Term life benefits",
                "Bonus payments",
            ],
            "Secure your family's future with flexible savings plans.",
            "https://images.unsplash.com/photo-1509099836639-18ba1795216d?auto=format&fit=crop&q=80&w=100",
        ),
    ])
    .expect("seed catalog ids are distinct")
}

fn blog(
    id: &str,
    title: &str,
    excerpt: &str,
    date: &str,
    author: &str,
    source: &str,
    image_url: &str,
) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        date: date.to_string(),
        author: author.to_string(),
        source: source.to_string(),
        image_url: image_url.to_string(),
    }
}

pub fn seed_blog_posts() -> Vec<BlogPost> {
    vec![
        blog(
            "b1",
            "New Motor Insurance Regulations in Kenya 2024",
            "IRA announces new guidelines for motor valuation and premium calculations as the \
             industry moves towards digitalization.",
            "Oct 24, 2023",
            "Admin",
            "Business Daily",
            "https://images.unsplash.com/photo-1517672651691-24622a91b550?auto=format&fit=crop&q=80&w=1200",
        ),
        blog(
            "b2",
            "Top 5 Health Insurance Providers for Families",
            "Comparing inpatient limits and outpatient benefits across major players to help you \
             choose the best medical cover.",
            "Nov 12, 2023",
            "Insurance Guru",
            "The Standard",
            "https://images.unsplash.com/photo-1584515933487-779824d29309?auto=format&fit=crop&q=80&w=1200",
        ),
        blog(
            "b3",
            "Why Travel Insurance is Mandatory for Schengen Visas",
            "Understanding the minimum requirements for European travel coverage and how to \
             ensure your policy is compliant.",
            "Dec 05, 2023",
            "Travel Experts",
            "Citizen Digital",
            "https://images.unsplash.com/photo-1488646953014-85cb44e25828?auto=format&fit=crop&q=80&w=1200",
        ),
    ]
}

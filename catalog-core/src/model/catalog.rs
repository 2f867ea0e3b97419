//! src/model/catalog.rs
//! ============================================================================
//! # Catalog: Static, Read-Only Listing Source
//!
//! Holds the listings supplied at startup. The built-in dataset is the
//! Curitiba local-services marketplace; an alternate catalog can be loaded
//! from a JSON array with the same field names.

use std::{collections::HashSet, path::Path, sync::Arc};

use tracing::info;

use crate::{
    error::{AppError, AppResult},
    model::listing::{Listing, SharedListing},
};

/// Immutable listing sequence. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Arc<[SharedListing]>,
}

impl Catalog {
    /// Validates and wraps a listing sequence.
    pub fn from_listings(listings: Vec<Listing>) -> AppResult<Self> {
        let mut ids = HashSet::with_capacity(listings.len());

        for listing in &listings {
            if !ids.insert(listing.id) {
                return Err(AppError::catalog(format!("duplicate listing id {}", listing.id)));
            }
            if !listing.price.is_finite() || listing.price < 0.0 {
                return Err(AppError::catalog(format!(
                    "listing {} has invalid price {}",
                    listing.id, listing.price
                )));
            }
            if !(0.0..=5.0).contains(&listing.rating) {
                return Err(AppError::catalog(format!(
                    "listing {} has rating {} outside 0.0-5.0",
                    listing.id, listing.rating
                )));
            }
            if listing.popularity_score > 100 {
                return Err(AppError::catalog(format!(
                    "listing {} has popularity {} above 100",
                    listing.id, listing.popularity_score
                )));
            }
        }

        Ok(Self {
            listings: listings.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;
        Self::from_listings(listings)
    }

    /// Loads an alternate catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::catalog(format!("cannot read {}: {e}", path.display()))
        })?;
        let catalog = Self::from_json_str(&text)?;
        info!(
            "Loaded {} listings from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn listings(&self) -> &[SharedListing] {
        &self.listings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: u32) -> Option<&SharedListing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// The built-in marketplace dataset: 16 listings in 8 categories.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            listings: builtin_listings().into_iter().map(Arc::new).collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: u32,
    name: &str,
    description: &str,
    category: &str,
    price: f64,
    rating: f32,
    review_count: u32,
    location: &str,
    photo: &str,
    popularity_score: u8,
) -> Listing {
    Listing {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category: category.into(),
        price,
        rating,
        review_count,
        location: location.into(),
        image_ref: format!("https://images.unsplash.com/{photo}?w=400&h=300&fit=crop"),
        alt_text: None,
        popularity_score,
    }
}

fn builtin_listings() -> Vec<Listing> {
    vec![
        entry(
            1,
            "Eletricista Residencial",
            "Instalação e manutenção de sistemas elétricos residenciais. Troca de disjuntores, instalação de tomadas, chuveiros elétricos e iluminação LED. Atendimento 24h para emergências.",
            "Reparos & Manutenção",
            80.0,
            4.8,
            156,
            "Centro, Curitiba",
            "photo-1621905252507-b35492cc74b4",
            95,
        ),
        entry(
            2,
            "Encanador Especializado",
            "Serviços completos de encanamento: desentupimentos, vazamentos, instalação de torneiras e chuveiros. Experiência com sistemas hidráulicos residenciais e comerciais.",
            "Reparos & Manutenção",
            75.0,
            4.7,
            203,
            "Batel, Curitiba",
            "photo-1585704032915-c3400ca199e7",
            88,
        ),
        entry(
            3,
            "Limpeza Residencial Premium",
            "Serviço completo de limpeza residencial com produtos ecológicos. Limpeza profunda, organização de ambientes e manutenção semanal/quinzenal.",
            "Casa & Limpeza",
            120.0,
            4.9,
            89,
            "Água Verde, Curitiba",
            "photo-1558618666-fcd25c85cd64",
            92,
        ),
        entry(
            4,
            "Personal Trainer",
            "Treinamento personalizado em domicílio ou academia. Planos individualizados para emagrecimento, ganho de massa muscular e condicionamento físico geral.",
            "Beleza & Bem-estar",
            90.0,
            4.6,
            127,
            "Portão, Curitiba",
            "photo-1571019613454-1cb2f99b2d8b",
            78,
        ),
        entry(
            5,
            "Manicure & Pedicure",
            "Serviços de manicure e pedicure em domicílio. Esmaltação comum e gel, cuidados com cutícula, decoração de unhas e tratamentos especiais.",
            "Beleza & Bem-estar",
            45.0,
            4.8,
            245,
            "Cabral, Curitiba",
            "photo-1604654894610-df63bc536371",
            85,
        ),
        entry(
            6,
            "Professor de Inglês",
            "Aulas particulares de inglês para todos os níveis. Metodologia comunicativa, preparação para exames internacionais e inglês para negócios.",
            "Aulas & Treinamentos",
            60.0,
            4.9,
            167,
            "Juvevê, Curitiba",
            "photo-1434030216411-0b793f4b4173",
            91,
        ),
        entry(
            7,
            "Desenvolvedor Web",
            "Criação de websites e sistemas web personalizados. Especialista em React, Node.js e design responsivo. Portfolio completo disponível.",
            "Tecnologia & Design",
            150.0,
            4.7,
            78,
            "Centro, Curitiba",
            "photo-1498050108023-c5249f4df085",
            87,
        ),
        entry(
            8,
            "Designer Gráfico",
            "Criação de identidade visual, logos, materiais gráficos e design digital. Experiência com pequenas e médias empresas, atendimento personalizado.",
            "Tecnologia & Design",
            100.0,
            4.5,
            94,
            "Batel, Curitiba",
            "photo-1561070791-2526d30994b5",
            73,
        ),
        entry(
            9,
            "Passeador de Cães",
            "Passeios diários para seu pet com segurança e carinho. Relatórios com fotos, horários flexíveis e cuidados especiais conforme necessidade do animal.",
            "Pets",
            25.0,
            4.9,
            312,
            "Água Verde, Curitiba",
            "photo-1601758228041-f3b2795255f1",
            96,
        ),
        entry(
            10,
            "Veterinário Domiciliar",
            "Consultas veterinárias em domicílio para maior conforto do seu pet. Vacinação, exames básicos e orientações sobre cuidados gerais.",
            "Pets",
            120.0,
            4.8,
            145,
            "Portão, Curitiba",
            "photo-1559190394-df5a28aab5c5",
            89,
        ),
        entry(
            11,
            "Fotógrafo de Eventos",
            "Cobertura fotográfica profissional para casamentos, aniversários e eventos corporativos. Edição profissional e entrega digital em até 7 dias.",
            "Eventos & Fotografia",
            400.0,
            4.6,
            67,
            "Centro, Curitiba",
            "photo-1542038784456-1ea8e1e9f6c5",
            81,
        ),
        entry(
            12,
            "DJ para Festas",
            "Animação musical para festas de todos os tipos. Som profissional, iluminação básica e playlist personalizada conforme o evento e público.",
            "Eventos & Fotografia",
            300.0,
            4.4,
            89,
            "Cabral, Curitiba",
            "photo-1493225457124-a3eb161ffa5f",
            75,
        ),
        entry(
            13,
            "Mecânico Automotivo",
            "Manutenção preventiva e corretiva de veículos. Especialista em motores, freios, suspensão e sistemas elétricos automotivos. Orçamento sem compromisso.",
            "Automotivo",
            80.0,
            4.7,
            198,
            "Portão, Curitiba",
            "photo-1486262715619-67b85e0b08d3",
            86,
        ),
        entry(
            14,
            "Lavagem Automotiva",
            "Lavagem completa de veículos em domicílio. Enceramento, limpeza interna, pneu pretinho e cuidados especiais com estofamento de couro.",
            "Automotivo",
            35.0,
            4.5,
            267,
            "Batel, Curitiba",
            "photo-1520340356584-f9917d1eea6f",
            82,
        ),
        entry(
            15,
            "Cozinheira Particular",
            "Preparo de refeições caseiras saudáveis em sua residência. Cardápios personalizados, cozinha brasileira e internacional, eventos especiais.",
            "Casa & Limpeza",
            100.0,
            4.9,
            134,
            "Juvevê, Curitiba",
            "photo-1556909114-f6e7ad7d3136",
            90,
        ),
        entry(
            16,
            "Professor de Música",
            "Aulas de violão, piano e teclado para iniciantes e intermediários. Metodologia lúdica para crianças e adultos, teoria musical incluída.",
            "Aulas & Treinamentos",
            70.0,
            4.8,
            156,
            "Água Verde, Curitiba",
            "photo-1493225457124-a3eb161ffa5f",
            84,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 16);

        let owned: Vec<Listing> = builtin.listings().iter().map(|l| (**l).clone()).collect();
        assert!(Catalog::from_listings(owned).is_ok());
        assert_eq!(builtin.find(9).map(|l| l.name.as_str()), Some("Passeador de Cães"));
        assert!(builtin.find(99).is_none());
    }

    #[test]
    fn json_catalog_uses_wire_field_names() {
        let json = r#"[{
            "id": 1, "name": "Dog Walker", "description": "Daily walks",
            "category": "Pets", "price": 25, "rating": 4.9, "reviews": 12,
            "location": "Centro", "image": "/img/dog.jpg", "popularity": 96
        }]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let listing = &catalog.listings()[0];
        assert_eq!(listing.review_count, 12);
        assert_eq!(listing.popularity_score, 96);
        assert_eq!(listing.alt_or_name(), "Dog Walker");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut listings = builtin_listings();
        listings[1].id = listings[0].id;
        let err = Catalog::from_listings(listings).unwrap_err();
        assert!(matches!(err, AppError::Catalog { .. }));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut listings = builtin_listings();
        listings[0].rating = 5.5;
        assert!(Catalog::from_listings(listings).is_err());

        let mut listings = builtin_listings();
        listings[0].popularity_score = 101;
        assert!(Catalog::from_listings(listings).is_err());

        let mut listings = builtin_listings();
        listings[0].price = f64::NAN;
        assert!(Catalog::from_listings(listings).is_err());
    }

    #[test]
    fn missing_file_is_a_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_json_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, AppError::Catalog { .. }));
    }
}

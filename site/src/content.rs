//! Literal content rendered by the landing page.
//!
//! Every record here is `'static` and immutable. Sections render one card per
//! record, in array order.

/// In-page navigation anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavAnchor {
    /// Target element id
    pub id: &'static str,
    /// Link text
    pub label: &'static str,
}

impl NavAnchor {
    /// `#id`, for the `href` attribute
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// The five sections reachable from the header, in display order.
pub const NAV_ANCHORS: [NavAnchor; 5] = [
    NavAnchor { id: "home", label: "Home" },
    NavAnchor { id: "properties", label: "Properties" },
    NavAnchor { id: "services", label: "Services" },
    NavAnchor { id: "about", label: "About" },
    NavAnchor { id: "contact", label: "Contact" },
];

/// Kind of listing, shown as a badge on property cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Apartment
    Apartment,
    /// Detached house
    House,
    /// Loft
    Loft,
    /// Condominium
    Condo,
    /// Townhouse
    Townhouse,
}

impl PropertyKind {
    /// Display name
    pub const fn label(self) -> &'static str {
        match self {
            PropertyKind::Apartment => "Apartment",
            PropertyKind::House => "House",
            PropertyKind::Loft => "Loft",
            PropertyKind::Condo => "Condo",
            PropertyKind::Townhouse => "Townhouse",
        }
    }
}

/// A featured listing card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Property {
    /// Stable key
    pub id: u32,
    /// Listing title
    pub title: &'static str,
    /// Formatted asking price
    pub price: &'static str,
    /// Neighbourhood and state
    pub location: &'static str,
    /// Bedrooms
    pub beds: u8,
    /// Bathrooms
    pub baths: u8,
    /// Formatted floor area in square feet
    pub sqft: &'static str,
    /// Externally hosted image URI
    pub image: &'static str,
    /// Shows the "Featured" badge
    pub featured: bool,
    /// Listing kind
    pub kind: PropertyKind,
}

/// Featured listings.
pub const PROPERTIES: [Property; 4] = [
    Property {
        id: 1,
        title: "Modern Downtown Apartment",
        price: "$450,000",
        location: "Downtown, NY",
        beds: 2,
        baths: 2,
        sqft: "1,200",
        image: "https://images.pexels.com/photos/1643383/pexels-photo-1643383.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop",
        featured: true,
        kind: PropertyKind::Apartment,
    },
    Property {
        id: 2,
        title: "Luxury Family Villa",
        price: "$850,000",
        location: "Suburbs, CA",
        beds: 4,
        baths: 3,
        sqft: "2,800",
        image: "https://images.pexels.com/photos/1396132/pexels-photo-1396132.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop",
        featured: true,
        kind: PropertyKind::House,
    },
    Property {
        id: 3,
        title: "Cozy Studio Loft",
        price: "$320,000",
        location: "Arts District, TX",
        beds: 1,
        baths: 1,
        sqft: "800",
        image: "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop",
        featured: false,
        kind: PropertyKind::Loft,
    },
    Property {
        id: 4,
        title: "Waterfront Condo",
        price: "$620,000",
        location: "Marina Bay, FL",
        beds: 3,
        baths: 2,
        sqft: "1,600",
        image: "https://images.pexels.com/photos/1571453/pexels-photo-1571453.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop",
        featured: true,
        kind: PropertyKind::Condo,
    },
];

/// Icon shown above a service card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    /// Magnifying glass
    Search,
    /// House
    Home,
    /// Calculator
    Calculator,
    /// Group of people
    Users,
    /// Shield with check
    Shield,
    /// Rising trend line
    TrendingUp,
}

/// A service card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    /// Card icon
    pub icon: ServiceIcon,
    /// Card title
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
}

/// Services grid.
pub const SERVICES: [Service; 6] = [
    Service {
        icon: ServiceIcon::Search,
        title: "Property Search",
        description: "Advanced search tools to find your perfect property with detailed filters and real-time updates.",
    },
    Service {
        icon: ServiceIcon::Home,
        title: "Property Listing",
        description: "List your property with professional photography and marketing to reach qualified buyers.",
    },
    Service {
        icon: ServiceIcon::Calculator,
        title: "Mortgage Calculator",
        description: "Calculate your monthly payments and explore financing options with our advanced tools.",
    },
    Service {
        icon: ServiceIcon::Users,
        title: "Expert Consultation",
        description: "Get personalized advice from our experienced real estate professionals.",
    },
    Service {
        icon: ServiceIcon::Shield,
        title: "Secure Transactions",
        description: "Safe and secure property transactions with full legal support and documentation.",
    },
    Service {
        icon: ServiceIcon::TrendingUp,
        title: "Market Analysis",
        description: "Comprehensive market insights and property valuations to make informed decisions.",
    },
];

/// A figure in the stats band
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    /// Headline figure, already formatted
    pub number: &'static str,
    /// What the figure counts
    pub label: &'static str,
    /// Supporting line
    pub description: &'static str,
}

/// Stats band.
pub const STATS: [Stat; 4] = [
    Stat {
        number: "10,000+",
        label: "Properties Listed",
        description: "Active listings across all categories",
    },
    Stat {
        number: "5,000+",
        label: "Happy Clients",
        description: "Satisfied customers and growing",
    },
    Stat {
        number: "50+",
        label: "Expert Agents",
        description: "Professional real estate experts",
    },
    Stat {
        number: "15+",
        label: "Years Experience",
        description: "Trusted in the real estate market",
    },
];

/// A client quote
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    /// Client name
    pub name: &'static str,
    /// Client role
    pub role: &'static str,
    /// Quote text, without quotation marks
    pub content: &'static str,
    /// Star rating out of five
    pub rating: u8,
    /// Externally hosted avatar URI
    pub avatar: &'static str,
}

/// Testimonials.
pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "First-time Homebuyer",
        content: "EstateHub made finding my dream home so easy! The search tools are incredible and the support team was there every step of the way.",
        rating: 5,
        avatar: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Property Investor",
        content: "The market analysis tools and property insights have been invaluable for my investment decisions. Highly recommend!",
        rating: 5,
        avatar: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Home Seller",
        content: "Sold my house in just 2 weeks! The listing process was seamless and the marketing reach was impressive.",
        rating: 5,
        avatar: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
    },
];

/// An `<option>` in one of the hero search selects
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOption {
    /// Form value
    pub value: &'static str,
    /// Visible text
    pub label: &'static str,
}

/// Property type select.
pub const PROPERTY_TYPE_OPTIONS: [SearchOption; 4] = [
    SearchOption { value: "house", label: PropertyKind::House.label() },
    SearchOption { value: "apartment", label: PropertyKind::Apartment.label() },
    SearchOption { value: "condo", label: PropertyKind::Condo.label() },
    SearchOption { value: "townhouse", label: PropertyKind::Townhouse.label() },
];

/// Price range select.
pub const PRICE_RANGE_OPTIONS: [SearchOption; 4] = [
    SearchOption { value: "0-200k", label: "$0 - $200k" },
    SearchOption { value: "200k-500k", label: "$200k - $500k" },
    SearchOption { value: "500k-1m", label: "$500k - $1M" },
    SearchOption { value: "1m+", label: "$1M+" },
];

/// Trust badges under the search form
pub const HERO_HIGHLIGHTS: [&str; 3] = ["10,000+ Properties", "Verified Listings", "Expert Support"];

use serde::{Deserialize, Serialize};

/// Raw place-name dictionary the registry is built from.
///
/// The built-in set covers continents, countries, states/provinces, and
/// famous cities. Custom sets can be supplied as JSON for alternate rule
/// packs or smaller test dictionaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlaceData {
    #[serde(default)]
    pub continents: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub states_provinces: Vec<String>,
    #[serde(default)]
    pub famous_cities: Vec<String>,
}

impl PlaceData {
    /// Create empty place data (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load place data from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid place data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The compiled-in dictionary used by the shipped game.
    #[must_use]
    pub fn builtin() -> Self {
        let to_owned = |names: &[&str]| names.iter().map(|n| (*n).to_string()).collect();
        Self {
            continents: to_owned(CONTINENTS),
            countries: to_owned(COUNTRIES),
            states_provinces: to_owned(STATES_PROVINCES),
            famous_cities: to_owned(FAMOUS_CITIES),
        }
    }

    /// All display names across every category, in declaration order.
    #[must_use]
    pub fn all_names(&self) -> Vec<String> {
        self.continents
            .iter()
            .chain(&self.countries)
            .chain(&self.states_provinces)
            .chain(&self.famous_cities)
            .cloned()
            .collect()
    }
}

const CONTINENTS: &[&str] = &[
    "Asia",
    "Africa",
    "North America",
    "South America",
    "Antarctica",
    "Europe",
    "Australia",
];

const COUNTRIES: &[&str] = &[
    "Afghanistan", "Albania", "Algeria", "Andorra", "Angola", "Argentina", "Armenia",
    "Australia", "Austria", "Azerbaijan", "Bahamas", "Bahrain", "Bangladesh", "Barbados",
    "Belarus", "Belgium", "Belize", "Benin", "Bhutan", "Bolivia", "Botswana", "Brazil",
    "Brunei", "Bulgaria", "Burkina Faso", "Burundi", "Cambodia", "Cameroon", "Canada",
    "Chad", "Chile", "China", "Colombia", "Comoros", "Congo", "Croatia", "Cuba", "Cyprus",
    "Czech Republic", "Denmark", "Djibouti", "Dominica", "Dominican Republic", "Ecuador",
    "Egypt", "El Salvador", "Eritrea", "Estonia", "Eswatini", "Ethiopia", "Fiji",
    "Finland", "France", "Gabon", "Gambia", "Georgia", "Germany", "Ghana", "Greece",
    "Grenada", "Guatemala", "Guinea", "Guyana", "Haiti", "Honduras", "Hungary", "Iceland",
    "India", "Indonesia", "Iran", "Iraq", "Ireland", "Israel", "Italy", "Jamaica",
    "Japan", "Jordan", "Kazakhstan", "Kenya", "Kiribati", "Kuwait", "Kyrgyzstan", "Laos",
    "Latvia", "Lebanon", "Lesotho", "Liberia", "Libya", "Liechtenstein", "Lithuania",
    "Luxembourg", "Madagascar", "Malawi", "Malaysia", "Maldives", "Mali", "Malta",
    "Mauritania", "Mauritius", "Mexico", "Micronesia", "Moldova", "Monaco", "Mongolia",
    "Montenegro", "Morocco", "Mozambique", "Myanmar", "Namibia", "Nauru", "Nepal",
    "Netherlands", "New Zealand", "Nicaragua", "Niger", "Nigeria", "North Korea",
    "North Macedonia", "Norway", "Oman", "Pakistan", "Palau", "Palestine", "Panama",
    "Paraguay", "Peru", "Philippines", "Poland", "Portugal", "Qatar", "Romania",
    "Russia", "Rwanda", "Samoa", "San Marino", "Senegal", "Serbia", "Seychelles",
    "Sierra Leone", "Singapore", "Slovakia", "Slovenia", "Solomon Islands", "Somalia",
    "South Africa", "South Korea", "South Sudan", "Spain", "Sri Lanka", "Sudan",
    "Suriname", "Sweden", "Switzerland", "Syria", "Taiwan", "Tajikistan", "Tanzania",
    "Thailand", "Timor-Leste", "Togo", "Tonga", "Trinidad and Tobago", "Tunisia",
    "Turkey", "Turkmenistan", "Tuvalu", "Uganda", "Ukraine", "United Arab Emirates",
    "United Kingdom", "United States", "Uruguay", "Uzbekistan", "Vanuatu",
    "Vatican City", "Venezuela", "Vietnam", "Yemen", "Zambia", "Zimbabwe",
];

const STATES_PROVINCES: &[&str] = &[
    // USA
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina",
    "North Dakota", "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island",
    "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah", "Vermont",
    "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
    // Canada
    "Alberta", "British Columbia", "Manitoba", "New Brunswick",
    "Newfoundland and Labrador", "Nova Scotia", "Ontario", "Quebec", "Saskatchewan",
    // Australia
    "New South Wales", "Queensland", "South Australia", "Tasmania", "Victoria",
    "Western Australia",
    // India
    "Andhra Pradesh", "Arunachal Pradesh", "Assam", "Bihar", "Chhattisgarh", "Goa",
    "Gujarat", "Haryana", "Himachal Pradesh", "Jharkhand", "Karnataka", "Kerala",
    "Madhya Pradesh", "Maharashtra", "Manipur", "Meghalaya", "Mizoram", "Nagaland",
    "Odisha", "Punjab", "Rajasthan", "Sikkim", "Tamil Nadu", "Telangana", "Tripura",
    "Uttar Pradesh", "Uttarakhand", "West Bengal",
    // Germany
    "Bavaria", "Berlin", "Hesse", "Saxony",
    // Brazil
    "Amazonas", "Bahia", "Rio de Janeiro", "Sao Paulo",
];

const FAMOUS_CITIES: &[&str] = &[
    "Accra", "Addis Ababa", "Amsterdam", "Ankara", "Athens", "Atlanta", "Baghdad",
    "Bangkok", "Barcelona", "Beijing", "Beirut", "Belgrade", "Berlin", "Bogota",
    "Boston", "Brasilia", "Bratislava", "Brussels", "Bucharest", "Budapest",
    "Buenos Aires", "Cairo", "Cape Town", "Caracas", "Casablanca", "Chicago",
    "Copenhagen", "Dakar", "Dallas", "Damascus", "Dhaka", "Doha", "Dubai", "Dublin",
    "Edinburgh", "Frankfurt", "Geneva", "Guangzhou", "Hanoi", "Havana", "Helsinki",
    "Ho Chi Minh City", "Hong Kong", "Houston", "Islamabad", "Istanbul", "Jakarta",
    "Jerusalem", "Johannesburg", "Kabul", "Kampala", "Karachi", "Kathmandu", "Khartoum",
    "Kiev", "Kingston", "Kinshasa", "Kuala Lumpur", "Kuwait City", "Lagos", "Lahore",
    "Lima", "Lisbon", "Ljubljana", "London", "Los Angeles", "Luanda", "Lusaka",
    "Luxembourg City", "Lyon", "Madrid", "Manila", "Marrakech", "Mecca", "Medina",
    "Melbourne", "Mexico City", "Miami", "Milan", "Minsk", "Mogadishu", "Monrovia",
    "Montevideo", "Montreal", "Moscow", "Mumbai", "Munich", "Nairobi", "Naples",
    "New Delhi", "New York City", "Nicosia", "Osaka", "Oslo", "Ottawa", "Panama City",
    "Paris", "Perth", "Philadelphia", "Phnom Penh", "Port-au-Prince", "Prague",
    "Pretoria", "Pyongyang", "Quito", "Rabat", "Reykjavik", "Riga", "Rio de Janeiro",
    "Riyadh", "Rome", "San Francisco", "San Jose", "San Juan", "San Salvador",
    "Santiago", "Santo Domingo", "Sao Paulo", "Sapporo", "Sarajevo", "Seattle", "Seoul",
    "Shanghai", "Singapore", "Sofia", "Stockholm", "Sydney", "Taipei", "Tallinn",
    "Tashkent", "Tbilisi", "Tehran", "Tel Aviv", "Tokyo", "Toronto", "Tripoli", "Tunis",
    "Ulaanbaatar", "Vancouver", "Venice", "Vienna", "Vientiane", "Vilnius", "Warsaw",
    "Washington D.C.", "Wellington", "Yangon", "Yaounde", "Zagreb", "Zurich",
    // Indian cities
    "Agra", "Ahmedabad", "Allahabad", "Amritsar", "Aurangabad", "Bengaluru", "Bhopal",
    "Bhubaneswar", "Chandigarh", "Chennai", "Coimbatore", "Dehradun", "Delhi",
    "Faridabad", "Ghaziabad", "Guwahati", "Gwalior", "Hyderabad", "Indore", "Jaipur",
    "Jamshedpur", "Jodhpur", "Kanpur", "Kochi", "Kolkata", "Kota", "Lucknow",
    "Ludhiana", "Madurai", "Mangalore", "Meerut", "Mysuru", "Nagpur", "Nashik",
    "Navi Mumbai", "Patna", "Pimpri-Chinchwad", "Pune", "Raipur", "Rajkot", "Ranchi",
    "Shimla", "Srinagar", "Surat", "Thane", "Thiruvananthapuram", "Udaipur", "Vadodara",
    "Varanasi", "Vijayawada", "Visakhapatnam",
];

//! Canned reply catalog for the intent router.
//!
//! Pure data: reply text, the inter-emirate distance table, and the chamber
//! occupancy table. Keeping the copy here keeps `router.rs` to mechanism.

pub const CONTAINER_OVERVIEW: &str = "Main container types and specifications:\n\n\
20ft Container: 6.1m x 2.44m x 2.59m, payload ~28,000 kg, capacity ~33 CBM.\n\
40ft Container: 12.2m x 2.44m x 2.59m, payload ~30,400 kg, capacity ~67 CBM.\n\
40ft High Cube: same footprint as the 40ft but 2.9m tall, for voluminous goods.\n\
Reefer Container (20ft and 40ft): insulated and temperature-controlled (+2 C to -25 C), for food, pharma and perishables.\n\
Open Top Container: no roof, crane-loadable, for tall cargo such as machinery or steel.\n\
Flat Rack Container: no sides or roof, for oversized loads like vehicles or transformers.\n\
SME Containers: modular containers used in the UAE for small-scale import/export or temporary storage.";

pub const CONTAINER_20FT: &str = "A 20ft container is 6.1m long x 2.44m wide x 2.59m high, \
capacity ~33 CBM, payload up to 28,000 kg. Ideal for compact or heavy cargo.";

pub const CONTAINER_40FT: &str = "A 40ft container is 12.2m long x 2.44m wide x 2.59m high, \
capacity ~67 CBM, payload up to 30,400 kg. Suitable for palletized or bulk shipments.";

pub const CONTAINER_HIGH_CUBE: &str = "A 40ft High Cube container is 2.9m tall, one foot taller \
than standard containers. Ideal for bulky or voluminous cargo.";

pub const CONTAINER_REEFER: &str = "Reefer containers are temperature-controlled (+2 C to -25 C), \
ideal for perishables like food and pharmaceuticals. Available in 20ft and 40ft sizes.";

pub const CONTAINER_OPEN_TOP: &str = "Open Top containers suit tall or top-loaded cargo such as \
steel coils, pipes or machinery. They allow crane access from above.";

pub const CONTAINER_FLAT_RACK: &str = "Flat Rack containers have no sides or roof, suited to \
oversized cargo such as vehicles, generators or heavy equipment.";

pub const CONTAINER_SME: &str = "In logistics SME usually means Small and Medium Enterprises, but \
in the UAE 'SME containers' can mean modular containers used for short-term import/export or \
compact warehouse storage.";

pub const PALLETS: &str = "The 21K warehouse runs two main pallet types:\n\n\
Standard Pallet: 1.2m x 1.0m, load capacity ~1,000 kg, 14 pallets per bay.\n\
Euro Pallet: 1.2m x 0.8m, load capacity ~800 kg, 21 pallets per bay.\n\n\
Pallets are used for racking, picking and transport. Value added services such as pallet \
loading, shrink wrapping, labeling and stretch film wrapping are available for safe handling.";

pub const STORAGE_RATES: &str = "Current Abu Dhabi storage rates:\n\n\
Standard Storage:\n\
- AC: 2.5 AED/CBM/day\n\
- Non-AC: 2.0 AED/CBM/day\n\
- Open Shed: 1.8 AED/CBM/day\n\n\
Chemical Storage:\n\
- Chemical AC: 3.5 AED/CBM/day\n\
- Chemical Non-AC: 2.7 AED/CBM/day\n\n\
Open Yard Storage:\n\
- KIZAD: 125 AED/SQM/year\n\
- Mussafah: 160 AED/SQM/year\n\n\
A WMS fee applies to indoor storage unless excluded. For a full quotation, please fill out the form.";

pub const STORAGE_CLARIFY: &str =
    "Which type of storage are you asking about? Standard, Chemicals, or Open Yard?";

pub const VAS_STANDARD: &str = "Standard VAS includes:\n\
- In/Out Handling: 20 AED/CBM\n\
- Pallet Loading: 12 AED/pallet\n\
- Documentation: 125 AED/set\n\
- Packing with pallet: 85 AED/CBM\n\
- Inventory Count: 3,000 AED/event\n\
- Case Picking: 2.5 AED/carton\n\
- Sticker Labeling: 1.5 AED/label\n\
- Shrink Wrapping: 6 AED/pallet\n\
- VNA Usage: 2.5 AED/pallet";

pub const VAS_CHEMICAL: &str = "Chemical VAS includes:\n\
- Handling (Palletized): 20 AED/CBM\n\
- Handling (Loose): 25 AED/CBM\n\
- Documentation: 150 AED/set\n\
- Packing with pallet: 85 AED/CBM\n\
- Inventory Count: 3,000 AED/event\n\
- Inner Bag Picking: 3.5 AED/bag\n\
- Sticker Labeling: 1.5 AED/label\n\
- Shrink Wrapping: 6 AED/pallet";

pub const VAS_OPENYARD: &str = "Open Yard VAS includes:\n\
- Forklift (3T-7T): 90 AED/hr\n\
- Forklift (10T): 200 AED/hr\n\
- Forklift (15T): 320 AED/hr\n\
- Mobile Crane (50T): 250 AED/hr\n\
- Mobile Crane (80T): 450 AED/hr\n\
- Container Lifting: 250 AED/lift\n\
- Container Stripping (20ft): 1,200 AED/hr";

pub const FLEET: &str = "The UAE fleet includes:\n\
- Flatbed trailers\n\
- Box trucks\n\
- Double trailers\n\
- Refrigerated trucks (chiller and freezer)\n\
- Lowbeds\n\
- Tippers\n\
- Small city delivery trucks\n\n\
Fleet vehicles cover full truckload, LTL and container movements.";

pub const TRUCK_TYPES: &str = "Local and GCC transportation runs on:\n\
- Flatbeds for general cargo\n\
- Lowbeds for heavy equipment\n\
- Tippers for construction bulk\n\
- Box trucks for secure goods\n\
- Refrigerated trucks for temperature-sensitive cargo\n\
- Double trailers for long-haul\n\
- Vans and city trucks for last-mile delivery.";

pub const TRANSPORTATION: &str = "Full-service land transportation is offered across the UAE and \
GCC with a modern fleet:\n\
- Flatbeds (up to 25 tons)\n\
- Lowbeds for heavy or oversized cargo\n\
- Tippers for bulk material (sand, gravel, etc.)\n\
- Box trucks for protected cargo\n\
- Refrigerated trucks for temperature-controlled delivery\n\
- Double trailers for high-volume long-haul moves\n\
- Small city trucks for last-mile distribution\n\n\
Transport is coordinated from Abu Dhabi with real-time tracking, WMS integration and \
documentation support.";

pub const TRUCK_CAPACITY: &str = "Typical tonnage per truck type:\n\n\
Flatbed Truck: up to 22-25 tons (general cargo, containers)\n\
Double Trailer (Articulated): up to 50-60 tons combined (long-haul)\n\
Box Truck / Curtainside: ~5-10 tons (packaged cargo)\n\
Refrigerated Truck: 3-12 tons depending on size\n\
City Truck (1-3 Ton): final delivery\n\
Lowbed Trailer: up to 60 tons (heavy equipment)\n\
Tipper / Dump Truck: ~15-20 tons (bulk like sand or gravel)";

pub const QUOTATION_GUIDE: &str = "To get a full quotation, please close this chat and fill in \
the form on the left. The system will generate a downloadable Word file automatically.";

pub const QUOTATION_REQUIREMENTS: &str = "To build a proper 3PL storage quotation, please \
collect:\n\
1. Type of commodity (e.g. FMCG, chemicals, pharma)\n\
2. Contract period (duration in months or years)\n\
3. Storage volume (CBM for warehouse, SQM for open yard)\n\
4. In/out throughput (daily or monthly)\n\
5. Any special handling or VAS requirements\n\n\
Once ready, fill the form to generate the quotation.";

pub const CHEMICAL_QUOTE_REQUIREMENTS: &str = "To quote for chemical storage, collect:\n\
1. Product name and type\n\
2. Hazard class\n\
3. Required volume (CBM or SQM)\n\
4. Duration of storage (contract)\n\
5. MSDS (Material Safety Data Sheet)\n\
6. Any special handling or packaging needs";

pub const SQM_CBM_CONVERSION: &str = "If the client doesn't provide CBM, you can estimate it \
using 1 SQM ~ 1.8 CBM for standard racked storage.";

pub const SOP: &str = "SOP stands for Standard Operating Procedure: documented, step-by-step \
workflows followed in:\n\
- Warehouse operations (inbound, storage, outbound)\n\
- Transport scheduling\n\
- Safety, compliance and VAS services\n\
All SOPs are tailored for quality, safety and process efficiency.";

pub const WAREHOUSE_OPERATIONS: &str = "Typical warehouse processes:\n\n\
Inbound: receiving, inspection, put-away\n\
Storage: placement in racks (Selective, VNA, Drive-in)\n\
Order Processing: picking, packing, labeling\n\
Outbound: staging, dispatch, delivery coordination\n\
Inventory: cycle counts, audits, stock updates\n\n\
All handled via INFOR WMS for full traceability.";

pub const PACKING_MATERIALS: &str = "Packing materials in use:\n\
- Shrink wrap (6 rolls/box, 1 roll covers 20 pallets)\n\
- Strapping rolls (20 pallets/roll)\n\
- Buckles (1,000 pcs/box for 250 pallets)\n\
- Bubble wrap, foam sheets, strong cartons\n\
Used for relocation, warehousing and international shipments.";

pub const COMPANY_PROFILE: &str = "Stowline Logistics is a third-party logistics operator based \
in Abu Dhabi:\n\
- Business lines: warehousing, open yard storage, transport, 3PL/4PL solutions\n\
- Serves pharma, FMCG, oil and gas, and government logistics\n\
- Operates indoor chambers, chemical stores and open yards across Mussafah and KIZAD";

pub const FACILITIES: &str = "Abu Dhabi logistics facilities:\n\
- 21K Warehouse (Mussafah): 21,000 sqm\n\
- M44: 5,760 sqm\n\
- M45: 5,000 sqm\n\
- Al Markaz (Hameem): 12,000 sqm\n\
- Open Yard: 360,000 sqm (KIZAD + Mussafah)\n\
- Total plot: 481,000 sqm including roads and utilities";

pub const RECORDS_MANAGEMENT: &str = "RMS (Record Management System) is located inside the 21K \
warehouse:\n\
- Stores physical documents and paper archives\n\
- FM200 fire suppression installed\n\
- Used by Civil Defense and other government clients\n\
- Not intended for return-material storage\n\
- Access-controlled and humidity-safe";

pub const SUSTAINABILITY: &str = "Sustainability commitments:\n\
- Electric trucks operating in Abu Dhabi\n\
- Solar panels and LED lighting in warehouses\n\
- Route consolidation to reduce CO2\n\
- ISO 14001 compliance (environmental management)\n\
- Paperless operations and RFID\n\
- Target: net zero emissions by 2050";

pub const ADNOC: &str = "There is a long-standing relationship with ADNOC and its group \
companies:\n\
- Warehousing chemicals and dangerous goods for ADNOC projects\n\
- Transportation to remote sites, oilfields and offshore yards\n\
- Marine logistics (barge and landing craft support)\n\
- ADNOC-compliant safety procedures\n\
- Support for EPC contractors";

pub const CERTIFICATIONS: &str = "Certifications held:\n\
- ISO 9001 - Quality Management\n\
- ISO 14001 - Environmental Management\n\
- ISO 45001 - Occupational Health and Safety\n\
- GDP - Good Distribution Practices (pharma)\n\
- GDSP - Good Distribution and Storage Practices\n\n\
These standards cover safety, compliance and reliability in warehousing and transport.";

pub const FIRE_SUPPRESSION: &str = "The RMS and sensitive storage zones are equipped with FM200 \
fire suppression. The system is clean-agent based, ideal for documents and electronics.";

pub const TEMPERATURE_ZONES: &str = "Three temperature zones are supported in Abu Dhabi:\n\n\
Ambient: +18 C to +25 C, for FMCG, electronics and dry goods\n\
Cold Room: +2 C to +8 C, for pharma, food and healthcare\n\
Freezer: -22 C, for frozen products and sensitive materials\n\n\
All zones are GDP-compliant and monitored 24/7 with backup systems.";

pub const PHARMA_COLD_CHAIN: &str = "GDP-compliant pharma and healthcare logistics:\n\
- Cold chain: +2 C to +8 C and freezer at -22 C\n\
- Ambient: +18 C to +25 C\n\
- Warehouses in the Airport Freezone and Mussafah\n\
- WMS tracking with expiry and batch control\n\
- Validated SOPs and a QHSE-trained team";

pub const AIRPORT_FREEZONE: &str = "A GDP-compliant facility operates in the Abu Dhabi Airport \
Freezone:\n\
- Ideal for healthcare, pharma and high-value goods\n\
- Ambient and cold chain zones\n\
- Proximity to air cargo terminals\n\
- Customs-cleared operations\n\
- WMS integration with pharma tracking";

pub const QHSE: &str = "Strict QHSE standards are maintained:\n\
- ISO 9001: Quality Management\n\
- ISO 14001: Environmental Management\n\
- ISO 45001: Occupational Health and Safety\n\n\
Facilities are equipped with access control, firefighting systems and CCTV, QHSE inductions \
and risk assessments, emergency exits and first aid stations.";

pub const TRAINING: &str = "Structured staff training covers:\n\
- QHSE (fire, safety, first aid, manual handling)\n\
- Equipment use (forklifts, cranes, pallet jacks, VNA)\n\
- Warehouse processes: inbound, outbound, put-away, replenishment\n\
- System usage: WMS, scanning, reporting\n\
- Regular toolbox talks and refresher courses\n\n\
New staff undergo onboarding plus revalidation every 6 months.";

pub const CHAMBER_SUMMARY: &str =
    "There are 7 chambers in the 21K warehouse. Let me know which one you're asking about.";

pub const EV_TRUCKS: &str = "Electric vehicles operate in Abu Dhabi logistics:\n\
- Haul 20ft and 40ft containers\n\
- Zero tailpipe emissions\n\
- ~250-300 km range\n\
- Ideal for port shuttles and urban deliveries\n\
- Part of the sustainability strategy";

pub const RELOCATION: &str = "Complete relocation services across the UAE:\n\
- Machinery shifting, dismantling, reinstalling\n\
- Warehouse and office moves\n\
- Packing, transport, offloading\n\
- Insurance and site clearance\n\
- Supervisor, riggers and convoy support available\n\n\
Handled by a trained team with proper tools, documentation and supervision.";

pub const ASSET_TRACKING: &str = "Full RFID and asset management services:\n\
- RFID or barcode tagging of items\n\
- Real-time tracking via scanning gates\n\
- Asset history and audit trail\n\
- Ideal for IT, calibration tools and government assets\n\
- Labels carry unique ID, ownership and scan codes\n\n\
Custom systems are available for onboarding, audits and reporting.";

pub const ECOMMERCE: &str = "Ecommerce logistics support includes:\n\
- Warehousing and storage for SKUs\n\
- WMS-based order pick, pack and dispatch\n\
- Return management\n\
- Last-mile delivery\n\
- Integration with Shopify, Magento and WooCommerce\n\
- Sites: KIZAD, Airport Freezone, Mussafah";

pub const EQUIPMENT: &str = "Material handling equipment in use:\n\
- Forklifts (3T-15T)\n\
- Reach trucks\n\
- VNA machines\n\
- Pallet jacks (manual and electric)\n\
- Mobile cranes (50T and 80T)\n\
- Container lifters\n\n\
All staff are trained and certified for safe operations.";

pub const GREETING: &str =
    "Hello! I'm here to help with anything related to logistics, transport, or warehousing.";

pub const HOW_ARE_YOU: &str = "I'm doing great! How can I assist you with our services today?";

pub const THANKS: &str = "You're very welcome!";

pub const CLARIFICATION: &str = "Can you please rephrase or try asking again with more detail?";

/// Inter-emirate road routes: both-direction match pattern plus the reply.
pub const DISTANCE_ROUTES: &[(&str, &str)] = &[
    (
        r"abu dhabi.*dubai|dubai.*abu dhabi",
        "The distance between Abu Dhabi and Dubai is about 140 km; travel time is roughly 1.5 hours.",
    ),
    (
        r"abu dhabi.*sharjah|sharjah.*abu dhabi",
        "The distance between Abu Dhabi and Sharjah is about 160 km; travel time is roughly 1.5 to 2 hours.",
    ),
    (
        r"abu dhabi.*ajman|ajman.*abu dhabi",
        "The distance between Abu Dhabi and Ajman is approximately 170 km; travel time is about 1.5 to 2 hours.",
    ),
    (
        r"abu dhabi.*ras al khaimah|ras al khaimah.*abu dhabi",
        "The road distance from Abu Dhabi to Ras Al Khaimah is about 240 km; travel time is around 2.5 to 3 hours.",
    ),
    (
        r"abu dhabi.*fujairah|fujairah.*abu dhabi",
        "Abu Dhabi to Fujairah is approximately 250 km; travel time is about 2.5 to 3 hours.",
    ),
    (
        r"dubai.*sharjah|sharjah.*dubai",
        "Dubai to Sharjah is around 30 km; travel time is typically 30 to 45 minutes.",
    ),
    (
        r"dubai.*ajman|ajman.*dubai",
        "Dubai to Ajman is approximately 40 km; around 40 to 50 minutes by road.",
    ),
    (
        r"dubai.*ras al khaimah|ras al khaimah.*dubai",
        "The distance between Dubai and Ras Al Khaimah is around 120 km; travel time is 1.5 to 2 hours.",
    ),
    (
        r"dubai.*fujairah|fujairah.*dubai",
        "Dubai to Fujairah is approximately 130 km; travel time is about 2 hours.",
    ),
    (
        r"sharjah.*ajman|ajman.*sharjah",
        "Sharjah and Ajman are very close, only about 15 km apart; 15 to 20 minutes by road.",
    ),
    (
        r"sharjah.*fujairah|fujairah.*sharjah",
        "Sharjah to Fujairah is roughly 110 km and takes about 2 hours by road.",
    ),
    (
        r"sharjah.*ras al khaimah|ras al khaimah.*sharjah",
        "Sharjah to Ras Al Khaimah is approximately 100 km; travel time is around 1.5 to 2 hours.",
    ),
];

/// Chamber number -> tenant, 21K warehouse.
pub const CHAMBER_TENANTS: &[(u32, &str)] = &[
    (1, "Khalifa University"),
    (2, "PSN"),
    (3, "food clients and fast-moving items"),
    (4, "MCC, TR, and ADNOC"),
    (5, "PSN"),
    (6, "ZARA and TR"),
    (7, "Civil Defense and the RMS"),
];

//! Copy for each page.

use super::*;

const BOOK_NOW: HeroAction = HeroAction::Book(Location::MainShop);

const SERVICES_LINK: InternalLink = InternalLink {
    label: "Learn more",
    page: Page::Services,
};

pub static CALL_TO_ACTION: CallToAction = CallToAction {
    title: "Ready for a fresh cut?",
    body: "Book your appointment today and experience the SW Blends difference.",
    label: "Book Now",
    location: Location::MainShop,
};

pub static HOME: PageContent = PageContent {
    page: Page::Home,
    hero: Hero {
        title: "Classic Cuts.",
        accent: Some("Modern Style."),
        subtitle: "Experience premium barbering in the heart of Manly, Sydney. Where tradition meets contemporary style.",
        actions: &[
            BOOK_NOW,
            HeroAction::Visit(InternalLink {
                label: "Our Services",
                page: Page::Services,
            }),
        ],
    },
    sections: &[
        Section::Highlights {
            intro: Intro {
                title: "Our Signature Cuts",
                subtitle: "Precision cuts tailored to your style",
            },
            items: &[
                Highlight {
                    icon: None,
                    title: "Classic Cut",
                    body: "Traditional barbering with modern techniques for a timeless look.",
                    tone: Tone::Primary,
                    link: Some(SERVICES_LINK),
                },
                Highlight {
                    icon: None,
                    title: "Fade & Beard Trim",
                    body: "Precision fades paired with expert beard shaping for a clean, sharp look.",
                    tone: Tone::Primary,
                    link: Some(SERVICES_LINK),
                },
                Highlight {
                    icon: None,
                    title: "Signature Style",
                    body: "Full service cut, style and grooming experience for the modern gentleman.",
                    tone: Tone::Primary,
                    link: Some(SERVICES_LINK),
                },
            ],
            style: CardStyle::Figure,
            more: Some(InternalLink {
                label: "View All Services",
                page: Page::Services,
            }),
        },
        Section::Story {
            title: "About SW Blends",
            paragraphs: &[
                "SW Blends is more than just a barbershop – it's a destination for men who appreciate quality grooming in a relaxed, contemporary environment. Founded by master barber Sander Woodward on the principles of exceptional craftsmanship and personalized service, SW Blends has quickly become Manly's go-to spot for premium cuts and styling.",
                "With his skilled approach and attention to detail, Sander combines traditional techniques with modern trends to create looks that are both timeless and fresh. Whether you're in for a quick trim or a complete style transformation, he's dedicated to delivering a result that exceeds your expectations.",
            ],
            link: Some(InternalLink {
                label: "Learn More About Us",
                page: Page::About,
            }),
        },
        Section::Testimonials {
            intro: Intro {
                title: "What Our Clients Say",
                subtitle: "Real reviews from satisfied customers",
            },
            items: &[
                Testimonial {
                    name: "Mike J.",
                    quote: "Found my go-to barber in Manly. The attention to detail Sander provides at SW Blends is unmatched. He took the time to understand exactly what I wanted and delivered perfectly.",
                    rating: 5,
                    tone: Tone::Primary,
                },
                Testimonial {
                    name: "David S.",
                    quote: "Great atmosphere, skilled barbers, and always consistent results. The barXbar location is perfect for grabbing a drink after a fresh cut. Highly recommend!",
                    rating: 5,
                    tone: Tone::Secondary,
                },
            ],
        },
        Section::Locations {
            intro: Intro {
                title: "Find Us",
                subtitle: "Two convenient locations in Manly",
            },
            style: LocationsStyle::Combined,
        },
        Section::Highlights {
            intro: Intro {
                title: "The SW Blends Experience",
                subtitle: "What sets us apart",
            },
            items: &[
                Highlight {
                    icon: Some("scissors"),
                    title: "Precision Cuts",
                    body: "Expert barbers trained in the latest techniques to give you the perfect cut every time.",
                    tone: Tone::Primary,
                    link: None,
                },
                Highlight {
                    icon: Some("coffee"),
                    title: "Premium Experience",
                    body: "Complimentary beverages and a relaxed atmosphere to enhance your visit.",
                    tone: Tone::Secondary,
                    link: None,
                },
                Highlight {
                    icon: Some("users"),
                    title: "Community",
                    body: "A welcoming space where locals connect and everyone leaves looking their best.",
                    tone: Tone::Accent,
                    link: None,
                },
            ],
            style: CardStyle::Icon,
            more: None,
        },
    ],
};

pub static SERVICES_PAGE: PageContent = PageContent {
    page: Page::Services,
    hero: Hero {
        title: "Our Services",
        accent: None,
        subtitle: "Precision cuts and expert grooming services tailored to your style. Each service includes a consultation to ensure you get exactly what you want.",
        actions: &[],
    },
    sections: &[
        Section::ServiceMenu,
        Section::Faqs {
            intro: Intro {
                title: "Frequently Asked Questions",
                subtitle: "Find answers to common questions about our services",
            },
            items: &[
                Faq {
                    question: "How early should I arrive for my appointment?",
                    answer: "We recommend arriving 5-10 minutes before your scheduled time to check in and discuss your desired style with your barber.",
                },
                Faq {
                    question: "Do you take walk-ins?",
                    answer: "We accept walk-ins based on availability, but appointments are recommended to ensure you get your preferred time slot and barber.",
                },
                Faq {
                    question: "What's your cancellation policy?",
                    answer: "We appreciate 24 hours notice for cancellations. This allows us to offer the slot to another client. Repeated no-shows may affect future booking privileges.",
                },
                Faq {
                    question: "Are there any styles you specialize in?",
                    answer: "Our team excels in a wide range of styles from classic cuts to modern fades, textured crops, and beard styling. Feel free to bring reference photos of styles you like.",
                },
            ],
        },
    ],
};

static SANDER: Profile = Profile {
    name: "Sander Woodward",
    role: "Founder & Master Barber",
    paragraphs: &[
        "With multiple years of experience in barbering, Sander founded SW Blends to create a destination that blends traditional techniques with modern styles. His precision, attention to detail, and commitment to client satisfaction have made him one of Manly's most sought-after barbers.",
        "Sander specializes in all types of men's cuts, from classic styles to modern fades, and is particularly known for his expert designs and styling. Every client receives his undivided attention and expertise for a truly personalized experience.",
    ],
    books_at: Location::MainShop,
};

pub static ABOUT: PageContent = PageContent {
    page: Page::About,
    hero: Hero {
        title: "About SW Blends",
        accent: None,
        subtitle: "Where traditional barbering meets modern style",
        actions: &[],
    },
    sections: &[
        Section::Story {
            title: "Our Story",
            paragraphs: &[
                "SW Blends was founded by Sander Woodward in 2023 with a vision to create more than just another barbershop in Manly. Sander set out to establish a destination where men could not only get exceptional haircuts but also experience a sense of community and relaxation.",
                "What began as a small operation quickly grew into a local favorite thanks to Sander's commitment to quality cuts, personalized service, and creating an atmosphere where clients feel like friends. Today, Sander Woodward serves the Manly community from two locations, while maintaining the same dedication to craft and experience that defined it from day one.",
                "The name, SW Blends, represents both Sander's initials and the seamless blend of traditional barbering techniques with contemporary styles – a philosophy that guides every cut he delivers.",
            ],
            link: None,
        },
        Section::Highlights {
            intro: Intro {
                title: "Our Values",
                subtitle: "The principles that guide our work",
            },
            items: &[
                Highlight {
                    icon: Some("scissors"),
                    title: "Craftsmanship",
                    body: "We're committed to excellence in our craft, continuously honing our skills and techniques to deliver the best cuts possible.",
                    tone: Tone::Primary,
                    link: None,
                },
                Highlight {
                    icon: Some("clock"),
                    title: "Attention to Detail",
                    body: "We believe the difference between a good haircut and a great one lies in the details. We take the time to get every aspect right.",
                    tone: Tone::Secondary,
                    link: None,
                },
                Highlight {
                    icon: Some("users"),
                    title: "Community",
                    body: "We're more than a business – we're part of the Manly community, creating a space where connections are made and strengthened.",
                    tone: Tone::Accent,
                    link: None,
                },
                Highlight {
                    icon: Some("coffee"),
                    title: "Experience",
                    body: "We believe a visit to the barbershop should be an experience – a time to relax, socialize, and leave feeling and looking your best.",
                    tone: Tone::Info,
                    link: None,
                },
            ],
            style: CardStyle::Badge,
            more: None,
        },
        Section::Profile {
            intro: Intro {
                title: "Meet The Barber",
                subtitle: "The skilled professional behind your great cuts",
            },
            profile: &SANDER,
        },
        Section::Locations {
            intro: Intro {
                title: "Our Locations",
                subtitle: "Find us in two convenient locations in Manly",
            },
            style: LocationsStyle::Detailed,
        },
        Section::Faqs {
            intro: Intro {
                title: "Frequently Asked Questions",
                subtitle: "Common questions about our services",
            },
            items: &[
                Faq {
                    question: "Do I need to make an appointment?",
                    answer: "While we accept walk-ins when possible, we recommend booking an appointment to ensure you get your preferred time and barber. Our weekend slots fill up quickly!",
                },
                Faq {
                    question: "How long does a typical haircut take?",
                    answer: "Most of our standard haircuts take around 30-45 minutes, depending on the style and complexity. Beard services typically take 30 minutes.",
                },
                Faq {
                    question: "What's the difference between your two locations?",
                    answer: "Our Main Shop offers a traditional barbershop experience in a relaxed environment. The barXbar location brings our services to a vibrant social setting for a unique experience.",
                },
                Faq {
                    question: "Do you offer any student discounts?",
                    answer: "Yes, we offer our High School Cut service which is specially priced for students. Just bring your student ID when you visit.",
                },
            ],
        },
    ],
};

pub static BOOKING: PageContent = PageContent {
    page: Page::Booking,
    hero: Hero {
        title: "Book Your Appointment",
        accent: None,
        subtitle: "Choose your preferred location for a precision cut and style",
        actions: &[],
    },
    sections: &[
        Section::BookingOptions,
        Section::PriceLists {
            intro: Intro {
                title: "Our Services",
                subtitle: "Quality haircuts for every style",
            },
            more: Some(InternalLink {
                label: "See Full Service Details",
                page: Page::Services,
            }),
        },
        Section::Highlights {
            intro: Intro {
                title: "Booking Information",
                subtitle: "Important details to know before your appointment",
            },
            items: &[
                Highlight {
                    icon: None,
                    title: "Cancellation Policy",
                    body: "We understand that plans can change. We kindly request 24 hours notice for cancellations or rescheduling. Cancellations with less than 24 hours notice may incur a fee.",
                    tone: Tone::Primary,
                    link: None,
                },
                Highlight {
                    icon: None,
                    title: "Arrival Time",
                    body: "Please arrive 5-10 minutes before your scheduled appointment time. This allows time for check-in and consultation before your cut. Late arrivals may result in a shortened service time to accommodate other scheduled appointments.",
                    tone: Tone::Primary,
                    link: None,
                },
                Highlight {
                    icon: None,
                    title: "Walk-ins",
                    body: "While we welcome walk-ins, availability cannot be guaranteed. For the best experience and to ensure you get your preferred time, we recommend booking in advance through our online booking platforms.",
                    tone: Tone::Primary,
                    link: None,
                },
                Highlight {
                    icon: None,
                    title: "Payment Methods",
                    body: "We accept all major credit cards, EFTPOS, and mobile payment methods. Cash is also accepted at both locations.",
                    tone: Tone::Primary,
                    link: None,
                },
            ],
            style: CardStyle::Plain,
            more: None,
        },
    ],
};

pub static GALLERY: PageContent = PageContent {
    page: Page::Gallery,
    hero: Hero {
        title: "Gallery",
        accent: None,
        subtitle: "Browse through our haircut styles and shop locations",
        actions: &[],
    },
    sections: &[
        Section::Gallery,
        Section::Highlights {
            intro: Intro {
                title: "Haircut Inspiration",
                subtitle: "Popular styles you can request",
            },
            items: &[
                Highlight {
                    icon: None,
                    title: "Classic Side Part",
                    body: "A timeless style that's clean, professional, and versatile. Features a defined part with longer top and tapered sides.",
                    tone: Tone::Primary,
                    link: None,
                },
                Highlight {
                    icon: None,
                    title: "Modern Fade",
                    body: "Contemporary and stylish with a gradual blend from very short sides to a longer top. Multiple fade heights available.",
                    tone: Tone::Secondary,
                    link: None,
                },
                Highlight {
                    icon: None,
                    title: "Textured Crop",
                    body: "A modern style featuring a textured top with short sides. Perfect for adding volume and dimension to your hair.",
                    tone: Tone::Accent,
                    link: None,
                },
            ],
            style: CardStyle::Figure,
            more: None,
        },
        Section::Testimonials {
            intro: Intro {
                title: "Client Experiences",
                subtitle: "Hear what our clients have to say",
            },
            items: &[
                Testimonial {
                    name: "James L.",
                    quote: "Sander is the only person I trust with my hair. I've been going to him for over a year now and every cut is consistently perfect.",
                    rating: 5,
                    tone: Tone::Primary,
                },
                Testimonial {
                    name: "Alex T.",
                    quote: "The barXbar location is such a cool spot to get a cut. Great atmosphere and excellent service every time.",
                    rating: 5,
                    tone: Tone::Secondary,
                },
                Testimonial {
                    name: "Mark R.",
                    quote: "After trying several barbers in Manly, I've finally found my go-to spot. Sander understood exactly what I wanted and executed it perfectly.",
                    rating: 5,
                    tone: Tone::Accent,
                },
            ],
        },
    ],
};

pub static CONTACT: PageContent = PageContent {
    page: Page::Contact,
    hero: Hero {
        title: "Contact Us",
        accent: None,
        subtitle: "Get in touch or book your next appointment at one of our Manly locations",
        actions: &[],
    },
    sections: &[
        Section::ContactDetails,
        Section::OpeningHours {
            intro: Intro {
                title: "Business Hours",
                subtitle: "When you can find us at our locations",
            },
        },
        Section::Faqs {
            intro: Intro {
                title: "Common Questions",
                subtitle: "Find quick answers to frequently asked questions",
            },
            items: &[
                Faq {
                    question: "How do I book an appointment?",
                    answer: "You can book appointments through our online booking platforms. For Main Shop appointments with Sander Woodward, use Trybe, and for barXbar appointments, use Fresha. Links to both platforms are available on our website.",
                },
                Faq {
                    question: "What should I do if I need to cancel?",
                    answer: "If you need to cancel or reschedule your appointment, please do so at least 24 hours in advance through the booking platform you used. For last-minute cancellations, please contact us directly via email.",
                },
                Faq {
                    question: "Is parking available?",
                    answer: "Limited street parking is available near both locations. We recommend using public transportation when possible, as Manly can get busy, especially during summer months.",
                },
                Faq {
                    question: "Do you accept walk-ins?",
                    answer: "We primarily operate by appointment to ensure we can provide the best service. However, you're welcome to check for same-day availability through our booking platforms or via email.",
                },
            ],
        },
    ],
};

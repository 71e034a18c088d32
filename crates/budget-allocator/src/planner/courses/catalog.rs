use crate::planner::domain::{Course, Discount};

static SOFTWARE_ENGINEERING_COURSES: &[Course] = &[
    Course {
        title: "Complete Web Development Bootcamp",
        provider: "Udemy",
        price: 89.99,
        duration: "65 hours",
        rating: 4.7,
        students: "850K+",
        description: "Learn HTML, CSS, JavaScript, React, Node.js, and MongoDB",
        skills: &["HTML/CSS", "JavaScript", "React", "Node.js", "MongoDB"],
        certification_type: "Certificate of Completion",
        url: "https://www.udemy.com/course/the-complete-web-development-bootcamp/",
        emoji: "💻",
        discount: Some(Discount {
            original_price: 199.99,
            discount_percent: 55,
        }),
    },
    Course {
        title: "CS50's Introduction to Computer Science",
        provider: "Harvard (edX)",
        price: 0.0,
        duration: "12 weeks",
        rating: 4.8,
        students: "4M+",
        description: "Harvard's legendary computer science course, completely free",
        skills: &["C", "Python", "SQL", "JavaScript", "CSS", "HTML"],
        certification_type: "Verified Certificate ($199 optional)",
        url: "https://www.edx.org/course/introduction-computer-science-harvardx-cs50x",
        emoji: "🎓",
        discount: None,
    },
    Course {
        title: "Full Stack JavaScript Developer",
        provider: "Codecademy Pro",
        price: 39.99,
        duration: "6 months",
        rating: 4.6,
        students: "500K+",
        description: "Build full-stack applications with JavaScript, React, and Express",
        skills: &["JavaScript", "React", "Express", "SQL", "Git"],
        certification_type: "Professional Certificate",
        url: "https://www.codecademy.com/learn/paths/full-stack-engineer-career-path",
        emoji: "⚡",
        discount: None,
    },
];

static DATA_SCIENCE_COURSES: &[Course] = &[
    Course {
        title: "Python for Data Science and Machine Learning",
        provider: "Udemy",
        price: 94.99,
        duration: "25 hours",
        rating: 4.6,
        students: "500K+",
        description: "Master Python, Pandas, NumPy, Matplotlib, Seaborn, and Scikit-Learn",
        skills: &["Python", "Pandas", "NumPy", "Machine Learning", "Data Visualization"],
        certification_type: "Certificate of Completion",
        url: "https://www.udemy.com/course/python-for-data-science-and-machine-learning-bootcamp/",
        emoji: "📊",
        discount: Some(Discount {
            original_price: 199.99,
            discount_percent: 53,
        }),
    },
    Course {
        title: "Google Data Analytics Certificate",
        provider: "Google (Coursera)",
        price: 49.0,
        duration: "6 months",
        rating: 4.5,
        students: "1M+",
        description: "Job-ready skills in data analytics with Google's professional certificate",
        skills: &["SQL", "Tableau", "R", "Data Cleaning", "Data Visualization"],
        certification_type: "Google Career Certificate",
        url: "https://www.coursera.org/professional-certificates/google-data-analytics",
        emoji: "📈",
        discount: None,
    },
    Course {
        title: "IBM Data Science Professional Certificate",
        provider: "IBM (Coursera)",
        price: 49.0,
        duration: "11 months",
        rating: 4.6,
        students: "400K+",
        description: "Complete data science program from IBM with hands-on projects",
        skills: &["Python", "SQL", "Machine Learning", "Data Visualization", "Statistics"],
        certification_type: "IBM Professional Certificate",
        url: "https://www.coursera.org/professional-certificates/ibm-data-science",
        emoji: "🔬",
        discount: None,
    },
];

static AI_MACHINE_LEARNING_ENGINEER_COURSES: &[Course] = &[
    Course {
        title: "Machine Learning Specialization",
        provider: "Stanford University (Coursera)",
        price: 49.0,
        duration: "3 months",
        rating: 4.9,
        students: "4.8M+",
        description: "Andrew Ng's legendary ML course - the gold standard for AI education",
        skills: &["Python", "TensorFlow", "Neural Networks", "Deep Learning", "Computer Vision"],
        certification_type: "Stanford University Certificate",
        url: "https://www.coursera.org/specializations/machine-learning-introduction",
        emoji: "🤖",
        discount: None,
    },
    Course {
        title: "Deep Learning Specialization",
        provider: "DeepLearning.AI (Coursera)",
        price: 49.0,
        duration: "5 months",
        rating: 4.8,
        students: "1M+",
        description: "Master deep learning with hands-on projects in computer vision and NLP",
        skills: &["Deep Learning", "CNN", "RNN", "TensorFlow", "PyTorch"],
        certification_type: "DeepLearning.AI Certificate",
        url: "https://www.coursera.org/specializations/deep-learning",
        emoji: "🧠",
        discount: None,
    },
    Course {
        title: "Complete AI & Machine Learning Bootcamp",
        provider: "Udemy",
        price: 94.99,
        duration: "44 hours",
        rating: 4.6,
        students: "300K+",
        description: "Comprehensive AI course covering ML, deep learning, and real-world projects",
        skills: &["Python", "Scikit-Learn", "TensorFlow", "Keras", "OpenCV"],
        certification_type: "Certificate of Completion",
        url: "https://www.udemy.com/course/complete-machine-learning-and-data-science-bootcamp-to-mastery/",
        emoji: "🚀",
        discount: Some(Discount {
            original_price: 199.99,
            discount_percent: 53,
        }),
    },
    Course {
        title: "AI for Everyone",
        provider: "DeepLearning.AI (Coursera)",
        price: 0.0,
        duration: "4 weeks",
        rating: 4.8,
        students: "500K+",
        description: "Free introduction to AI concepts - perfect for beginners and managers",
        skills: &["AI Strategy", "Machine Learning Basics", "AI Applications", "Ethics"],
        certification_type: "Free Certificate",
        url: "https://www.coursera.org/learn/ai-for-everyone",
        emoji: "🎓",
        discount: None,
    },
];

static AI_PRODUCT_MANAGER_COURSES: &[Course] = &[
    Course {
        title: "AI Product Management Specialization",
        provider: "Duke University (Coursera)",
        price: 49.0,
        duration: "4 months",
        rating: 4.7,
        students: "50K+",
        description: "Learn to manage AI products from strategy to deployment",
        skills: &["AI Strategy", "Product Management", "Data Science", "Ethics", "Business"],
        certification_type: "Duke University Certificate",
        url: "https://www.coursera.org/specializations/ai-product-management-duke",
        emoji: "🧠",
        discount: None,
    },
    Course {
        title: "AI for Product Managers",
        provider: "Udemy",
        price: 79.99,
        duration: "8 hours",
        rating: 4.5,
        students: "25K+",
        description: "Practical AI knowledge for product managers and business leaders",
        skills: &["AI Applications", "Product Strategy", "Team Management", "ROI Analysis"],
        certification_type: "Certificate of Completion",
        url: "https://www.udemy.com/course/ai-for-product-managers/",
        emoji: "📊",
        discount: Some(Discount {
            original_price: 149.99,
            discount_percent: 47,
        }),
    },
    Course {
        title: "Introduction to Generative AI",
        provider: "Google Cloud (Coursera)",
        price: 0.0,
        duration: "1 hour",
        rating: 4.6,
        students: "200K+",
        description: "Free introduction to generative AI and large language models",
        skills: &["Generative AI", "LLMs", "ChatGPT", "AI Applications", "Prompt Engineering"],
        certification_type: "Google Cloud Certificate",
        url: "https://www.coursera.org/learn/introduction-generative-ai",
        emoji: "✨",
        discount: None,
    },
];

static CLOUD_ARCHITECTURE_COURSES: &[Course] = &[
    Course {
        title: "AWS Certified Solutions Architect",
        provider: "A Cloud Guru",
        price: 39.0,
        duration: "40 hours",
        rating: 4.7,
        students: "300K+",
        description: "Master AWS cloud architecture and pass the certification exam",
        skills: &["AWS", "Cloud Architecture", "EC2", "S3", "VPC", "IAM"],
        certification_type: "AWS Certification Prep",
        url: "https://acloudguru.com/course/aws-certified-solutions-architect-associate-saa-c03",
        emoji: "☁️",
        discount: None,
    },
    Course {
        title: "Microsoft Azure Fundamentals",
        provider: "Microsoft Learn",
        price: 0.0,
        duration: "12 hours",
        rating: 4.5,
        students: "2M+",
        description: "Free comprehensive Azure training from Microsoft",
        skills: &["Azure", "Cloud Computing", "Virtual Machines", "Storage", "Networking"],
        certification_type: "Microsoft Certification",
        url: "https://docs.microsoft.com/en-us/learn/paths/azure-fundamentals/",
        emoji: "🌐",
        discount: None,
    },
];

static CYBERSECURITY_COURSES: &[Course] = &[
    Course {
        title: "Complete Ethical Hacking Course",
        provider: "Udemy",
        price: 89.99,
        duration: "15 hours",
        rating: 4.5,
        students: "200K+",
        description: "Learn penetration testing and ethical hacking techniques",
        skills: &["Penetration Testing", "Network Security", "Linux", "Python", "Kali Linux"],
        certification_type: "Certificate of Completion",
        url: "https://www.udemy.com/course/learn-ethical-hacking-from-scratch/",
        emoji: "🔒",
        discount: Some(Discount {
            original_price: 199.99,
            discount_percent: 55,
        }),
    },
    Course {
        title: "Google Cybersecurity Certificate",
        provider: "Google (Coursera)",
        price: 49.0,
        duration: "6 months",
        rating: 4.7,
        students: "500K+",
        description: "Job-ready cybersecurity skills with Google's professional program",
        skills: &["Network Security", "Incident Response", "Python", "Linux", "SIEM"],
        certification_type: "Google Career Certificate",
        url: "https://www.coursera.org/professional-certificates/google-cybersecurity",
        emoji: "🛡️",
        discount: None,
    },
];

static PRODUCT_MANAGEMENT_COURSES: &[Course] = &[
    Course {
        title: "Product Management Fundamentals",
        provider: "Udemy",
        price: 79.99,
        duration: "12 hours",
        rating: 4.4,
        students: "100K+",
        description: "Learn product strategy, roadmapping, and stakeholder management",
        skills: &["Product Strategy", "Roadmapping", "User Research", "Analytics", "Agile"],
        certification_type: "Certificate of Completion",
        url: "https://www.udemy.com/course/become-a-product-manager-learn-the-skills-get-a-job/",
        emoji: "🚀",
        discount: Some(Discount {
            original_price: 149.99,
            discount_percent: 47,
        }),
    },
    Course {
        title: "Google Project Management Certificate",
        provider: "Google (Coursera)",
        price: 49.0,
        duration: "6 months",
        rating: 4.6,
        students: "800K+",
        description: "Master project management with Google's professional certificate",
        skills: &["Project Planning", "Risk Management", "Agile", "Scrum", "Leadership"],
        certification_type: "Google Career Certificate",
        url: "https://www.coursera.org/professional-certificates/google-project-management",
        emoji: "📋",
        discount: None,
    },
];

static DIGITAL_MARKETING_COURSES: &[Course] = &[
    Course {
        title: "Digital Marketing Specialization",
        provider: "University of Illinois (Coursera)",
        price: 49.0,
        duration: "8 months",
        rating: 4.6,
        students: "200K+",
        description: "Complete digital marketing program from a top university",
        skills: &["SEO", "SEM", "Social Media", "Analytics", "Content Marketing"],
        certification_type: "University Certificate",
        url: "https://www.coursera.org/specializations/digital-marketing",
        emoji: "📱",
        discount: None,
    },
    Course {
        title: "Google Digital Marketing & E-commerce",
        provider: "Google (Coursera)",
        price: 49.0,
        duration: "6 months",
        rating: 4.5,
        students: "600K+",
        description: "Job-ready digital marketing skills with Google certification",
        skills: &["Google Ads", "Facebook Ads", "Email Marketing", "Analytics", "E-commerce"],
        certification_type: "Google Career Certificate",
        url: "https://www.coursera.org/professional-certificates/google-digital-marketing-ecommerce",
        emoji: "🎯",
        discount: None,
    },
];

static UX_UI_DESIGN_COURSES: &[Course] = &[
    Course {
        title: "Google UX Design Certificate",
        provider: "Google (Coursera)",
        price: 49.0,
        duration: "6 months",
        rating: 4.7,
        students: "700K+",
        description: "Complete UX design program from Google with portfolio projects",
        skills: &["User Research", "Wireframing", "Prototyping", "Figma", "Usability Testing"],
        certification_type: "Google Career Certificate",
        url: "https://www.coursera.org/professional-certificates/google-ux-design",
        emoji: "🎨",
        discount: None,
    },
    Course {
        title: "UI/UX Design Specialization",
        provider: "CalArts (Coursera)",
        price: 49.0,
        duration: "6 months",
        rating: 4.5,
        students: "150K+",
        description: "Learn visual design and user experience from California Institute of the Arts",
        skills: &["Visual Design", "User Interface", "Adobe Creative Suite", "Design Thinking"],
        certification_type: "University Certificate",
        url: "https://www.coursera.org/specializations/ui-ux-design",
        emoji: "✨",
        discount: None,
    },
];

static ELECTRICIAN_COURSES: &[Course] = &[
    Course {
        title: "Electrical Fundamentals and Safety",
        provider: "Penn Foster Career School",
        price: 1299.0,
        duration: "4 months",
        rating: 4.5,
        students: "25K+",
        description: "Complete electrical training program with hands-on labs",
        skills: &["Electrical Theory", "Wiring", "Safety Codes", "Circuit Analysis", "Motor Controls"],
        certification_type: "Career Diploma",
        url: "https://www.pennfoster.edu/programs/trades/electrician-training",
        emoji: "⚡",
        discount: None,
    },
    Course {
        title: "Electrical Code and Safety Training",
        provider: "Mike Holt Enterprises",
        price: 299.0,
        duration: "40 hours",
        rating: 4.7,
        students: "100K+",
        description: "National Electrical Code training for certification prep",
        skills: &["NEC Code", "Electrical Safety", "Grounding", "Branch Circuits", "Motors"],
        certification_type: "Certificate of Completion",
        url: "https://www.mikeholt.com/",
        emoji: "📋",
        discount: None,
    },
];

static PLUMBER_COURSES: &[Course] = &[
    Course {
        title: "Plumbing Fundamentals Course",
        provider: "Penn Foster Career School",
        price: 1199.0,
        duration: "4 months",
        rating: 4.4,
        students: "20K+",
        description: "Comprehensive plumbing training with practical applications",
        skills: &["Pipe Installation", "Water Systems", "Drainage", "Fixtures", "Codes"],
        certification_type: "Career Diploma",
        url: "https://www.pennfoster.edu/programs/trades/plumbing",
        emoji: "🔧",
        discount: None,
    },
    Course {
        title: "Plumbing Basics and Repair",
        provider: "Udemy",
        price: 79.99,
        duration: "8 hours",
        rating: 4.3,
        students: "15K+",
        description: "Learn basic plumbing repairs and installations",
        skills: &["Pipe Repair", "Fixture Installation", "Leak Detection", "Tools", "Safety"],
        certification_type: "Certificate of Completion",
        url: "https://www.udemy.com/course/plumbing-course/",
        emoji: "🛠️",
        discount: Some(Discount {
            original_price: 149.99,
            discount_percent: 47,
        }),
    },
];

static HVAC_TECHNICIAN_COURSES: &[Course] = &[
    Course {
        title: "HVAC Training Program",
        provider: "Penn Foster Career School",
        price: 1399.0,
        duration: "5 months",
        rating: 4.6,
        students: "30K+",
        description: "Complete HVAC training with EPA certification prep",
        skills: &["Heating Systems", "Air Conditioning", "Refrigeration", "EPA Certification", "Electrical"],
        certification_type: "Career Diploma + EPA Prep",
        url: "https://www.pennfoster.edu/programs/trades/hvac-technician",
        emoji: "🌡️",
        discount: None,
    },
    Course {
        title: "HVAC Fundamentals",
        provider: "Udemy",
        price: 89.99,
        duration: "12 hours",
        rating: 4.4,
        students: "25K+",
        description: "Learn HVAC basics, troubleshooting, and maintenance",
        skills: &["System Basics", "Troubleshooting", "Maintenance", "Tools", "Safety"],
        certification_type: "Certificate of Completion",
        url: "https://www.udemy.com/course/hvac-fundamentals/",
        emoji: "❄️",
        discount: Some(Discount {
            original_price: 179.99,
            discount_percent: 50,
        }),
    },
];

static HOME_INSPECTOR_COURSES: &[Course] = &[
    Course {
        title: "Certified Home Inspector Course",
        provider: "InterNACHI",
        price: 299.0,
        duration: "40 hours",
        rating: 4.8,
        students: "50K+",
        description: "Complete home inspection training with certification",
        skills: &["Structural Inspection", "Electrical Systems", "Plumbing", "HVAC", "Report Writing"],
        certification_type: "InterNACHI Certification",
        url: "https://www.nachi.org/education.htm",
        emoji: "🏠",
        discount: None,
    },
    Course {
        title: "Home Inspection Business Course",
        provider: "AHIT (American Home Inspectors Training)",
        price: 695.0,
        duration: "80 hours",
        rating: 4.7,
        students: "40K+",
        description: "Complete training plus business setup guidance",
        skills: &["Home Inspection", "Business Setup", "Marketing", "Legal Requirements", "Software"],
        certification_type: "AHIT Certificate",
        url: "https://www.ahit.com/",
        emoji: "🏡",
        discount: None,
    },
];

static WELDER_COURSES: &[Course] = &[
    Course {
        title: "Welding Fundamentals Course",
        provider: "Penn Foster Career School",
        price: 999.0,
        duration: "4 months",
        rating: 4.5,
        students: "35K+",
        description: "Complete welding training with multiple welding processes",
        skills: &["MIG Welding", "TIG Welding", "Stick Welding", "Blueprint Reading", "Safety"],
        certification_type: "Career Diploma",
        url: "https://www.pennfoster.edu/programs/trades/welding",
        emoji: "🔥",
        discount: None,
    },
    Course {
        title: "AWS Welding Certification Prep",
        provider: "Udemy",
        price: 94.99,
        duration: "10 hours",
        rating: 4.6,
        students: "20K+",
        description: "Prepare for AWS welding certification exams",
        skills: &["Welding Theory", "AWS Standards", "Testing Prep", "Quality Control", "Codes"],
        certification_type: "AWS Certification Prep",
        url: "https://www.udemy.com/course/aws-welding-certification/",
        emoji: "🏆",
        discount: Some(Discount {
            original_price: 189.99,
            discount_percent: 50,
        }),
    },
];

static SOLAR_PANEL_INSTALLER_COURSES: &[Course] = &[
    Course {
        title: "Solar Installation Professional Course",
        provider: "Solar Energy International (SEI)",
        price: 1995.0,
        duration: "5 days",
        rating: 4.9,
        students: "15K+",
        description: "Hands-on solar installation training with NABCEP prep",
        skills: &["Solar Design", "Installation", "Electrical", "Safety", "NABCEP Prep"],
        certification_type: "SEI Certificate + NABCEP Prep",
        url: "https://www.solarenergy.org/",
        emoji: "☀️",
        discount: None,
    },
    Course {
        title: "Solar Energy Basics",
        provider: "Udemy",
        price: 69.99,
        duration: "6 hours",
        rating: 4.4,
        students: "12K+",
        description: "Introduction to solar energy systems and installation",
        skills: &["Solar Basics", "System Components", "Installation Overview", "Maintenance", "Business"],
        certification_type: "Certificate of Completion",
        url: "https://www.udemy.com/course/solar-energy-course/",
        emoji: "🌞",
        discount: Some(Discount {
            original_price: 129.99,
            discount_percent: 46,
        }),
    },
];

static CARPENTER_COURSES: &[Course] = &[
    Course {
        title: "Carpentry Fundamentals",
        provider: "Penn Foster Career School",
        price: 1099.0,
        duration: "4 months",
        rating: 4.4,
        students: "18K+",
        description: "Complete carpentry training from basics to advanced techniques",
        skills: &["Framing", "Finishing", "Blueprint Reading", "Tools", "Safety"],
        certification_type: "Career Diploma",
        url: "https://www.pennfoster.edu/programs/trades/carpentry",
        emoji: "🔨",
        discount: None,
    },
    Course {
        title: "Woodworking and Carpentry Masterclass",
        provider: "Udemy",
        price: 84.99,
        duration: "15 hours",
        rating: 4.5,
        students: "30K+",
        description: "Learn carpentry skills from beginner to advanced",
        skills: &["Wood Selection", "Joinery", "Finishing", "Project Planning", "Tool Usage"],
        certification_type: "Certificate of Completion",
        url: "https://www.udemy.com/course/woodworking-carpentry/",
        emoji: "🪵",
        discount: Some(Discount {
            original_price: 159.99,
            discount_percent: 47,
        }),
    },
];

static DENTAL_HYGIENIST_COURSES: &[Course] = &[
    Course {
        title: "Dental Hygiene Prep Course",
        provider: "Kaplan Test Prep",
        price: 399.0,
        duration: "3 months",
        rating: 4.3,
        students: "8K+",
        description: "Prepare for dental hygiene school and certification",
        skills: &["Anatomy", "Dental Procedures", "Patient Care", "Radiology", "Pharmacology"],
        certification_type: "Test Prep Certificate",
        url: "https://www.kaptest.com/dental-hygiene",
        emoji: "🦷",
        discount: None,
    },
    Course {
        title: "Dental Assistant to Hygienist Bridge",
        provider: "Penn Foster Career School",
        price: 1599.0,
        duration: "8 months",
        rating: 4.2,
        students: "5K+",
        description: "Bridge program for dental assistants becoming hygienists",
        skills: &["Advanced Procedures", "Periodontics", "Local Anesthesia", "Nitrous Oxide", "Restorative"],
        certification_type: "Bridge Program Certificate",
        url: "https://www.pennfoster.edu/programs/healthcare/dental-hygienist",
        emoji: "🏥",
        discount: None,
    },
];

static FINANCIAL_PLANNING_COURSES: &[Course] = &[
    Course {
        title: "Financial Planning Certificate",
        provider: "University of Georgia (Coursera)",
        price: 49.0,
        duration: "4 months",
        rating: 4.4,
        students: "50K+",
        description: "Comprehensive financial planning education from a top university",
        skills: &["Investment Planning", "Retirement Planning", "Tax Planning", "Estate Planning"],
        certification_type: "University Certificate",
        url: "https://www.coursera.org/specializations/financial-planning",
        emoji: "💰",
        discount: None,
    },
    Course {
        title: "CFA Institute Investment Foundations",
        provider: "CFA Institute (edX)",
        price: 0.0,
        duration: "100 hours",
        rating: 4.6,
        students: "100K+",
        description: "Free investment fundamentals course from the CFA Institute",
        skills: &["Investment Analysis", "Portfolio Management", "Ethics", "Economics"],
        certification_type: "CFA Institute Certificate",
        url: "https://www.edx.org/course/introduction-to-investments",
        emoji: "📊",
        discount: None,
    },
];

/// Courses mapped to a career field by exact name. Unknown fields map to an empty slice.
pub(crate) fn courses_for_field(field: &str) -> &'static [Course] {
    match field {
        "Software Engineering" => SOFTWARE_ENGINEERING_COURSES,
        "Data Science" => DATA_SCIENCE_COURSES,
        "AI/Machine Learning Engineer" => AI_MACHINE_LEARNING_ENGINEER_COURSES,
        "AI Product Manager" => AI_PRODUCT_MANAGER_COURSES,
        "Cloud Architecture" => CLOUD_ARCHITECTURE_COURSES,
        "Cybersecurity" => CYBERSECURITY_COURSES,
        "Product Management" => PRODUCT_MANAGEMENT_COURSES,
        "Digital Marketing" => DIGITAL_MARKETING_COURSES,
        "UX/UI Design" => UX_UI_DESIGN_COURSES,
        "Electrician" => ELECTRICIAN_COURSES,
        "Plumber" => PLUMBER_COURSES,
        "HVAC Technician" => HVAC_TECHNICIAN_COURSES,
        "Home Inspector" => HOME_INSPECTOR_COURSES,
        "Welder" => WELDER_COURSES,
        "Solar Panel Installer" => SOLAR_PANEL_INSTALLER_COURSES,
        "Carpenter" => CARPENTER_COURSES,
        "Dental Hygienist" => DENTAL_HYGIENIST_COURSES,
        "Financial Planning" => FINANCIAL_PLANNING_COURSES,
        _ => &[],
    }
}

pub fn catalog_fields() -> &'static [&'static str] {
    &[
        "Software Engineering",
        "Data Science",
        "AI/Machine Learning Engineer",
        "AI Product Manager",
        "Cloud Architecture",
        "Cybersecurity",
        "Product Management",
        "Digital Marketing",
        "UX/UI Design",
        "Electrician",
        "Plumber",
        "HVAC Technician",
        "Home Inspector",
        "Welder",
        "Solar Panel Installer",
        "Carpenter",
        "Dental Hygienist",
        "Financial Planning",
    ]
}

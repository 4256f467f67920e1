//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Navigation
    t.insert("about".into(), "About Us".into());
    t.insert("services".into(), "Services".into());
    t.insert("careers".into(), "Careers".into());
    t.insert("contact".into(), "Contact".into());
    t.insert("language".into(), "Language".into());
    t.insert("loading".into(), "Loading...".into());
    t.insert("closeBanner".into(), "Close banner".into());

    // Hero
    t.insert("professionalCallCenter".into(), "Professional Call Center".into());
    t.insert("heroTitle".into(), "Connect Pro Group".into());
    t.insert("heroSubtitle".into(), "Your partner for customer communication".into());
    t.insert("heroDescription".into(), "We deliver multilingual call center services that keep your customers satisfied around the clock.".into());
    t.insert("contactUs".into(), "Contact Us".into());
    t.insert("ourServices".into(), "Our Services".into());
    t.insert("callCenterImage".into(), "Call center team at work".into());
    t.insert("yearsExperience".into(), "Years of Experience".into());
    t.insert("support247".into(), "24/7 Support".into());
    t.insert("premiumService".into(), "Premium Service".into());
    t.insert("alwaysAvailable".into(), "Always available for you".into());

    // About
    t.insert("aboutTitle".into(), "About Us".into());
    t.insert("aboutDescription".into(), "Connect Pro Group is a call center based in Tirana that supports companies across Europe with reliable, multilingual customer care.".into());
    t.insert("mission".into(), "Our Mission".into());
    t.insert("missionText".into(), "To turn every customer contact into a positive experience for our partners.".into());
    t.insert("vision".into(), "Our Vision".into());
    t.insert("visionText".into(), "To be the leading call center in the region for quality and trust.".into());
    t.insert("clientSatisfaction".into(), "Client Satisfaction".into());
    t.insert("activeClients".into(), "Active Clients".into());
    t.insert("values".into(), "Our Values".into());
    t.insert("professionalism".into(), "Professionalism".into());
    t.insert("professionalismText".into(), "Trained agents who handle every request with care.".into());
    t.insert("innovation".into(), "Innovation".into());
    t.insert("innovationText".into(), "Modern tools and processes that make support faster.".into());
    t.insert("excellence".into(), "Excellence".into());
    t.insert("excellenceText".into(), "High standards measured on every single call.".into());

    // Services
    t.insert("servicesTitle".into(), "Our Services".into());
    t.insert("servicesDescription".into(), "Complete outsourcing solutions for your customer communication.".into());
    t.insert("customerService".into(), "Customer Service".into());
    t.insert("customerServiceDesc".into(), "Friendly, competent handling of customer questions by phone, email and chat.".into());
    t.insert("technicalSupport".into(), "Technical Support".into());
    t.insert("technicalSupportDesc".into(), "First and second level support for your products and services.".into());
    t.insert("crmManagement".into(), "CRM Management".into());
    t.insert("crmManagementDesc".into(), "Maintenance and care of your customer data and relationships.".into());
    t.insert("salesSupport".into(), "Sales Support".into());
    t.insert("salesSupportDesc".into(), "Inbound and outbound sales that grow your revenue.".into());
    t.insert("appointmentSupport".into(), "Appointment Scheduling".into());
    t.insert("appointmentSupportDesc".into(), "Booking, confirming and rescheduling appointments for your customers.".into());
    t.insert("surveysMarketResearch".into(), "Surveys & Market Research".into());
    t.insert("surveysMarketResearchDesc".into(), "Telephone surveys that give you reliable market insights.".into());
    t.insert("orderProcessing".into(), "Order Processing".into());
    t.insert("orderProcessingDesc".into(), "Fast and accurate handling of orders, returns and complaints.".into());
    t.insert("contentModeration".into(), "Content Moderation".into());
    t.insert("contentModerationDesc".into(), "Review of user content to keep your platforms safe.".into());
    t.insert("backOfficeServices".into(), "Back Office Services".into());
    t.insert("backOfficeServicesDesc".into(), "Data entry, document processing and administrative tasks.".into());
    t.insert("previousSlide".into(), "Previous slide".into());
    t.insert("nextSlide".into(), "Next slide".into());
    t.insert("goToSlide".into(), "Go to slide".into());

    // Partners
    t.insert("partnersTitle".into(), "Our Partners".into());
    t.insert("partnersDescription".into(), "Leading companies trust us with their customers.".into());
    t.insert("vodafoneTitle".into(), "Vodafone".into());
    t.insert("vodafoneDesc".into(), "Telecommunications".into());
    t.insert("sigalTitle".into(), "Sigal".into());
    t.insert("sigalDesc".into(), "Insurance".into());
    t.insert("credinsTitle".into(), "Credins Bank".into());
    t.insert("credinsDesc".into(), "Banking".into());
    t.insert("balfinTitle".into(), "Balfin Group".into());
    t.insert("balfinDesc".into(), "Investments".into());
    t.insert("wideExperience".into(), "Wide Experience".into());
    t.insert("wideExperienceText".into(), "Projects across telecom, finance and retail.".into());
    t.insert("manyPartners".into(), "Many Partners".into());
    t.insert("manyPartnersText".into(), "Long-term cooperation with well-known brands.".into());
    t.insert("support24_7".into(), "24/7 Support".into());
    t.insert("support24_7Text".into(), "Our team is there for your customers day and night.".into());

    // Careers
    t.insert("careersTitle".into(), "Careers".into());
    t.insert("careersDescription".into(), "Join our team and grow with us.".into());
    t.insert("customerServicePosition".into(), "Customer Service Agent".into());
    t.insert("customerServiceRoleDesc".into(), "Help our partners' customers by phone and email.".into());
    t.insert("albanianEnglishRequired".into(), "Fluent Albanian and English".into());
    t.insert("communicationSkills".into(), "Strong communication skills".into());
    t.insert("customerServiceExp".into(), "Customer service experience is a plus".into());
    t.insert("shiftWork".into(), "Willingness to work in shifts".into());
    t.insert("technicalSupportPosition".into(), "Technical Support Agent".into());
    t.insert("technicalSupportRoleDesc".into(), "Solve technical problems for end users.".into());
    t.insert("itDegree".into(), "Degree in IT or a related field".into());
    t.insert("technicalKnowledge".into(), "Solid technical knowledge".into());
    t.insert("problemSolving".into(), "Problem-solving skills".into());
    t.insert("technicalSupportExp".into(), "Technical support experience".into());
    t.insert("fullName".into(), "Full Name".into());
    t.insert("phoneNumber".into(), "Phone Number".into());
    t.insert("position".into(), "Position".into());
    t.insert("selectPosition".into(), "Select a position".into());
    t.insert("uploadCV".into(), "Upload CV".into());
    t.insert("sendApplication".into(), "Send Application".into());

    // Contact
    t.insert("contactTitle".into(), "Contact".into());
    t.insert("contactDescription".into(), "Get in touch with us. We look forward to hearing from you.".into());
    t.insert("phone".into(), "Phone".into());
    t.insert("email".into(), "Email".into());
    t.insert("address".into(), "Address".into());
    t.insert("name".into(), "Name".into());
    t.insert("message".into(), "Message".into());
    t.insert("sendMessage".into(), "Send Message".into());
    t.insert("socialFollow".into(), "Follow us".into());

    t
}

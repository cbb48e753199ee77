use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page about">
            <h2 class="section-title">"About Jhula House"</h2>
            <p class="about__intro">
                "At Jhula House, we are passionate about swings and dedicated to bringing you the best \
                 in swing designs and experiences. Whether you're a swing enthusiast, a parent looking \
                 for the perfect addition to your backyard, or someone seeking relaxation and joy, we \
                 are your one-stop destination for all things swing-related."
            </p>
            <div class="about__story">
                <h3>"Our Story"</h3>
                <p>
                    "The seeds of Jhula House were sown when a group of like-minded individuals came \
                     together, bound by their shared appreciation for the simple pleasure of swinging. \
                     With backgrounds in design, wellness, craftsmanship, and outdoor living, we realized \
                     that swings have the power to transform spaces into havens of serenity and joy."
                </p>
            </div>
            <div class="about__cards">
                <div class="about__card">
                    <h3>"Our Mission"</h3>
                    <p>
                        "We are committed to showcasing a wide variety of swing styles, designs, and \
                         applications, and to providing accessible resources that help our audience \
                         select, install, and maintain their swings."
                    </p>
                </div>
                <div class="about__card">
                    <h3>"Our Vision"</h3>
                    <p>
                        "Our vision is to become the premier destination for swing enthusiasts, where \
                         swings embody comfort, creativity, and connection."
                    </p>
                </div>
            </div>
        </section>
    }
}

/// A constraint layout with scrambled attributes, no blank lines and an
/// explicitly closed childless element.
pub const LAYOUT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<androidx.constraintlayout.widget.ConstraintLayout xmlns:tools="http://schemas.android.com/tools" xmlns:app="http://schemas.android.com/apk/res-auto" xmlns:android="http://schemas.android.com/apk/res/android" android:layout_height="match_parent" android:layout_width="match_parent" tools:context=".MainActivity">
<TextView android:id="@+id/title" app:layout_constraintTop_toTopOf="parent" android:text="@string/app_name" android:layout_width="wrap_content" android:layout_height="wrap_content"/>
<!-- list of items -->
<androidx.recyclerview.widget.RecyclerView android:id="@+id/list" android:layout_width="0dp" android:layout_height="0dp" app:layoutManager="androidx.recyclerview.widget.LinearLayoutManager" tools:listitem="@layout/item"><requestFocus></requestFocus></androidx.recyclerview.widget.RecyclerView>
</androidx.constraintlayout.widget.ConstraintLayout>
"#;

pub const LAYOUT_FORMATTED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<androidx.constraintlayout.widget.ConstraintLayout
    xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:app="http://schemas.android.com/apk/res-auto"
    xmlns:tools="http://schemas.android.com/tools"
    android:layout_width="match_parent"
    android:layout_height="match_parent"
    tools:context=".MainActivity">

    <TextView
        android:id="@+id/title"
        android:layout_width="wrap_content"
        android:layout_height="wrap_content"
        android:text="@string/app_name"
        app:layout_constraintTop_toTopOf="parent" />

    <!-- list of items -->
    <androidx.recyclerview.widget.RecyclerView
        android:id="@+id/list"
        android:layout_width="0dp"
        android:layout_height="0dp"
        app:layoutManager="androidx.recyclerview.widget.LinearLayoutManager"
        tools:listitem="@layout/item">

        <requestFocus />
    </androidx.recyclerview.widget.RecyclerView>
</androidx.constraintlayout.widget.ConstraintLayout>
"#;

/// String resources with placeholders, CDATA and entity references.
pub const STRINGS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources xmlns:xliff="urn:oasis:names:tc:xliff:document:1.2">
    <string translatable="false" name="app_name">Formatter</string>
    <string name="greeting">Hello, <xliff:g id="name" example="Ada">%1$s</xliff:g>!</string>
    <string name="terms">Read the <![CDATA[<b>terms</b>]]> &amp; conditions</string>
    <plurals name="files">
        <item quantity="one">%d file</item>
        <item quantity="other">%d files</item>
    </plurals>
</resources>
"#;

pub const STRINGS_FORMATTED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources xmlns:xliff="urn:oasis:names:tc:xliff:document:1.2">

    <string name="app_name" translatable="false">Formatter</string>

    <string name="greeting">Hello, <xliff:g example="Ada" id="name">%1$s</xliff:g>!</string>

    <string name="terms">Read the &lt;b&gt;terms&lt;/b&gt; &amp; conditions</string>

    <plurals name="files">

        <item quantity="one">%d file</item>

        <item quantity="other">%d files</item>
    </plurals>
</resources>
"#;

/// A drawable whose prefixes differ from the canonical ones.
pub const SELECTOR: &str = r#"<selector xmlns:a="http://schemas.android.com/apk/res/android" xmlns:aa="http://schemas.android.com/aapt">
  <item a:state_pressed="true" a:drawable="@drawable/pressed"/>
  <item a:drawable="@drawable/normal"/>
</selector>"#;

pub const SELECTOR_FORMATTED: &str = r#"<selector
    xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:aapt="http://schemas.android.com/aapt">

    <item
        android:drawable="@drawable/pressed"
        android:state_pressed="true" />

    <item android:drawable="@drawable/normal" />
</selector>
"#;
